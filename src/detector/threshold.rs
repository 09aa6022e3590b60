//! Automatic binarization of the smoothed zone crop.
//!
//! The threshold is chosen per frame with Otsu's criterion (maximize the
//! between-class intensity variance over the 256-bin histogram), so a fixed
//! cutoff never needs retuning when lighting drifts. Polarity is fixed to
//! the domain: the path is darker than the background, so pixels at or
//! below the threshold become foreground.

use crate::image::{ImageU8, ImageView};

pub(crate) fn histogram(img: &ImageU8<'_>) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for y in 0..img.h {
        for &px in img.row(y) {
            hist[px as usize] += 1;
        }
    }
    hist
}

/// Otsu threshold over a 256-bin histogram.
///
/// Returns the intensity maximizing the between-class variance; ties keep
/// the lowest such intensity. A single-valued histogram yields that value.
pub(crate) fn otsu_threshold(hist: &[u32; 256]) -> u8 {
    let total: u64 = hist.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0;
    }
    let weighted_total: u64 = hist
        .iter()
        .enumerate()
        .map(|(v, &c)| v as u64 * c as u64)
        .sum();

    let mut best_t = 0u8;
    let mut best_var = -1.0f64;
    let mut count_below = 0u64;
    let mut sum_below = 0u64;

    for t in 0..256usize {
        count_below += hist[t] as u64;
        if count_below == 0 {
            continue;
        }
        let count_above = total - count_below;
        if count_above == 0 {
            break;
        }
        sum_below += t as u64 * hist[t] as u64;

        let mean_below = sum_below as f64 / count_below as f64;
        let mean_above = (weighted_total - sum_below) as f64 / count_above as f64;
        let diff = mean_below - mean_above;
        let var = count_below as f64 * count_above as f64 * diff * diff;
        if var > best_var {
            best_var = var;
            best_t = t as u8;
        }
    }
    best_t
}

/// Binarize with dark-is-foreground polarity: `1` where `px <= threshold`.
pub(crate) fn binarize_dark(img: &ImageU8<'_>, threshold: u8) -> Vec<u8> {
    let mut mask = Vec::with_capacity(img.w * img.h);
    for y in 0..img.h {
        for &px in img.row(y) {
            mask.push((px <= threshold) as u8);
        }
    }
    mask
}
