mod common;

use common::synthetic_frame::{blank_frame, frame_with_bar, frame_with_bars};
use line_follower::{DetectorOptions, PathDetector, Zone};

fn detector() -> PathDetector {
    PathDetector::new(DetectorOptions::default())
}

#[test]
fn known_bar_round_trips_within_one_pixel() {
    // Bar fully inside the default zone (30, 180, 260, 20)
    let frame = frame_with_bar(320, 240, (40, 180, 50, 20));
    let obs = detector().detect(&frame);

    assert!(obs.found, "expected the bar to be detected");
    assert!((obs.x as i64 - 40).abs() <= 1, "x={}", obs.x);
    assert!((obs.y as i64 - 180).abs() <= 1, "y={}", obs.y);
    assert!((obs.width as i64 - 50).abs() <= 1, "width={}", obs.width);
    assert!((obs.height as i64 - 20).abs() <= 1, "height={}", obs.height);
}

#[test]
fn detected_box_stays_inside_zone_extent() {
    let zone = Zone::default();
    // Bar wider than the zone; the crop bounds what can be observed
    let frame = frame_with_bar(320, 240, (0, 185, 320, 10));
    let obs = detector().detect(&frame);

    assert!(obs.found);
    assert!(obs.x >= zone.x);
    assert!(obs.y >= zone.y);
    assert!(obs.x + obs.width <= zone.x + zone.width);
    assert!(obs.y + obs.height <= zone.y + zone.height);
}

#[test]
fn blank_zone_reports_not_found() {
    let report = detector().detect_with_diagnostics(&blank_frame(320, 240));
    assert!(!report.observation.found);
    assert_eq!(report.trace.region_count, 0);
    assert!(report.trace.candidates.is_empty());
}

#[test]
fn bar_outside_zone_is_not_seen() {
    // Bar above the sensing zone
    let frame = frame_with_bar(320, 240, (100, 40, 50, 20));
    let obs = detector().detect(&frame);
    assert!(!obs.found);
}

#[test]
fn two_marks_keep_first_in_traversal_order() {
    let frame = frame_with_bars(320, 240, &[(50, 185, 20, 10), (200, 185, 20, 10)]);
    let report = detector().detect_with_diagnostics(&frame);

    assert!(report.observation.found);
    assert_eq!(
        report.trace.region_count, 2,
        "both marks must surface as candidates"
    );
    assert_eq!(report.trace.candidates.len(), 2);
    // First in row-major traversal order is the leftmost mark
    assert!(
        (report.observation.x as i64 - 50).abs() <= 1,
        "observation should come from the left mark, x={}",
        report.observation.x
    );
    assert!(report.trace.candidates[0].x < report.trace.candidates[1].x);
}

#[test]
fn coordinates_are_translated_to_frame_space() {
    let options = DetectorOptions {
        zone: Zone {
            x: 100,
            y: 50,
            width: 120,
            height: 40,
        },
        min_region_px: 1,
    };
    let frame = frame_with_bar(320, 240, (150, 60, 30, 20));
    let obs = PathDetector::new(options).detect(&frame);

    assert!(obs.found);
    // Zone-local coordinates would be (50, 10); frame-space must come back
    assert!((obs.x as i64 - 150).abs() <= 1, "x={}", obs.x);
    assert!((obs.y as i64 - 60).abs() <= 1, "y={}", obs.y);
}

#[test]
fn zone_outside_frame_reports_not_found() {
    let options = DetectorOptions {
        zone: Zone {
            x: 500,
            y: 500,
            width: 50,
            height: 50,
        },
        min_region_px: 1,
    };
    let obs = PathDetector::new(options).detect(&blank_frame(320, 240));
    assert!(!obs.found);
}

#[test]
fn min_region_filter_drops_speckles() {
    let options = DetectorOptions {
        min_region_px: 50,
        ..Default::default()
    };
    // 2x2 speck inside the zone, well below the 50px floor after smoothing
    let frame = frame_with_bar(320, 240, (100, 188, 2, 2));
    let obs = PathDetector::new(options).detect(&frame);
    assert!(!obs.found, "speck below min_region_px must be discarded");
}

#[test]
fn detection_is_deterministic() {
    let frame = frame_with_bar(320, 240, (60, 182, 40, 15));
    let d = detector();
    let a = d.detect(&frame);
    let b = d.detect(&frame);
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}
