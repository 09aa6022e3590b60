//! Separable 5-tap Gaussian smoothing for the zone crop.

use crate::image::{GrayBuffer, ImageU8};

/// Integer 5-tap Gaussian kernel `[1, 4, 6, 4, 1]`, sum 16.
const GAUSSIAN_5TAP: [u32; 5] = [1, 4, 6, 4, 1];
const TAP_SUM: u32 = 16;
const RADIUS: usize = 2;

/// Smooth `src` with the separable 5×5 Gaussian-equivalent kernel.
///
/// Borders clamp to the nearest pixel. Each pass rounds to nearest, which
/// keeps the result within ±1 intensity step of an exact float kernel.
pub(crate) fn blur_5x5(src: &ImageU8<'_>) -> GrayBuffer {
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 {
        return GrayBuffer::zeroed(w, h);
    }

    // Horizontal pass
    let mut horiz = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - RADIUS as isize, w);
                acc += tap * src.get(sx, y) as u32;
            }
            horiz[y * w + x] = ((acc + TAP_SUM / 2) / TAP_SUM) as u8;
        }
    }

    // Vertical pass
    let mut out = GrayBuffer::zeroed(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - RADIUS as isize, h);
                acc += tap * horiz[sy * w + x] as u32;
            }
            out.set(x, y, ((acc + TAP_SUM / 2) / TAP_SUM) as u8);
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(w: usize, h: usize, data: Vec<u8>) -> GrayBuffer {
        GrayBuffer::new(w, h, data)
    }

    #[test]
    fn constant_image_is_unchanged() {
        let img = gray(8, 8, vec![77u8; 64]);
        let blurred = blur_5x5(&img.as_view());
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(blurred.get(x, y), 77);
            }
        }
    }

    #[test]
    fn impulse_spreads_and_attenuates() {
        let mut data = vec![0u8; 81];
        data[4 * 9 + 4] = 255;
        let img = gray(9, 9, data);
        let blurred = blur_5x5(&img.as_view());
        let center = blurred.get(4, 4);
        assert!(center < 255, "peak must attenuate, got {center}");
        assert!(blurred.get(3, 4) > 0);
        assert!(blurred.get(4, 3) > 0);
        // outside the 5x5 support
        assert_eq!(blurred.get(0, 0), 0);
        assert_eq!(blurred.get(8, 8), 0);
    }

    #[test]
    fn step_edge_stays_monotonic() {
        let mut data = vec![0u8; 6 * 16];
        for y in 0..6 {
            for x in 8..16 {
                data[y * 16 + x] = 200;
            }
        }
        let img = gray(16, 6, data);
        let blurred = blur_5x5(&img.as_view());
        for x in 0..15 {
            assert!(
                blurred.get(x, 3) <= blurred.get(x + 1, 3),
                "blurred step must be monotonic at x={x}"
            );
        }
    }
}
