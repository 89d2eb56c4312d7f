//! Property-based tests for viewport computation and number formatting.

use curve_svg::{format_number, render_segments, Point, RenderOptions, Segment, Viewport};
use proptest::prelude::*;

fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    let point = (-1.0e3..1.0e3f64, -1.0e3..1.0e3f64).prop_map(|(x, y)| Point::new(x, y));
    prop::collection::vec(prop::collection::vec(point, 0..12), 0..6)
}

proptest! {
    #[test]
    fn viewport_contains_origin(segments in segments_strategy(), thickness in 0.1..10.0f64) {
        let view = Viewport::from_segments(&segments, thickness, 1.5);
        prop_assert!(view.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn viewport_contains_every_point(segments in segments_strategy(), thickness in 0.1..10.0f64) {
        let view = Viewport::from_segments(&segments, thickness, 1.5);
        prop_assert!(view.width >= 0.0 && view.height >= 0.0);
        for point in segments.iter().flatten() {
            prop_assert!(view.contains(*point), "{:?} outside {:?}", point, view);
        }
    }

    #[test]
    fn format_matches_rounded_value(value in -1.0e6..1.0e6f64, precision in 0usize..8) {
        let formatted = format_number(value, precision);
        let rounded: f64 = format!("{:.*}", precision, value).parse().unwrap();
        let reparsed: f64 = formatted.parse().unwrap();
        prop_assert_eq!(reparsed, rounded);
        prop_assert!(!formatted.ends_with('.'));
        if formatted.contains('.') {
            prop_assert!(!formatted.ends_with('0'));
        }
    }

    #[test]
    fn polyline_count_equals_segment_count(segments in segments_strategy()) {
        let svg = render_segments(&segments, &RenderOptions::default());
        prop_assert!(svg.starts_with("<svg"));
        prop_assert!(svg.ends_with("</svg>"));
        prop_assert_eq!(svg.matches("<polyline").count(), segments.len());
    }
}
