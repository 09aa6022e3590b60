use line_follower::image::FrameRgb8;

pub const BACKGROUND: [u8; 3] = [235, 235, 235];
pub const PATH_COLOR: [u8; 3] = [25, 25, 25];

/// Uniform light frame with no contrasting marking.
pub fn blank_frame(width: usize, height: usize) -> FrameRgb8 {
    FrameRgb8::filled(width, height, BACKGROUND)
}

/// Light frame with one dark axis-aligned bar `(x, y, w, h)`.
pub fn frame_with_bar(width: usize, height: usize, bar: (u32, u32, u32, u32)) -> FrameRgb8 {
    frame_with_bars(width, height, &[bar])
}

/// Light frame with several dark bars.
pub fn frame_with_bars(width: usize, height: usize, bars: &[(u32, u32, u32, u32)]) -> FrameRgb8 {
    let mut frame = blank_frame(width, height);
    for &(bx, by, bw, bh) in bars {
        for y in by..(by + bh).min(height as u32) {
            for x in bx..(bx + bw).min(width as u32) {
                frame.set(x as usize, y as usize, PATH_COLOR);
            }
        }
    }
    frame
}
