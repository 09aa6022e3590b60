use line_follower::image::FrameRgb8;
use line_follower::{DetectorOptions, PathDetector};

fn main() {
    // Demo stub: white 320x240 frame with a dark stripe crossing the
    // default sensing zone, run through the detector once
    let (w, h) = (320usize, 240usize);
    let mut frame = FrameRgb8::filled(w, h, [235, 235, 235]);
    for y in 0..h {
        for x in 150..165 {
            frame.set(x, y, [25, 25, 25]);
        }
    }

    let detector = PathDetector::new(DetectorOptions::default());
    let report = detector.detect_with_diagnostics(&frame);
    println!(
        "found={} center={} threshold={} regions={} latency_ms={:.3}",
        report.observation.found,
        report.observation.center(),
        report.trace.threshold,
        report.trace.region_count,
        report.trace.elapsed_ms
    );
}
