//! Curve SVG - render recursively generated curves as SVG polylines
//!
//! This library takes the segments of a curve from a [`CurveSource`],
//! computes a padded viewport around them, and emits a standalone SVG
//! document with one `<polyline>` per segment.
//!
//! # Example
//!
//! ```rust
//! use curve_svg::{render, CurveFile, RenderOptions};
//!
//! let curve = CurveFile::from_str(r#"
//!     [[levels]]
//!     segments = [[[0.0, 0.0], [10.0, 0.0]]]
//! "#).unwrap();
//!
//! let svg = render(&curve, &RenderOptions::new().with_precision(2));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("<polyline points='0,0 10,0 '/>"));
//! ```

pub mod curve;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use curve::{CurveFile, CurveSource};
pub use error::{CurveFileError, Error, OptionsError};
pub use geometry::{Point, Segment, Viewport, PADDING_FACTOR};
pub use renderer::{format_number, render_segments, render_svg, RenderOptions, STEP_FACTOR};

/// Render a curve source to an SVG document
///
/// Segments are requested at `source.min_depth() + options.depth`. Rendering
/// never fails: an empty segment set still yields a well-formed document.
///
/// # Example
///
/// ```rust
/// use curve_svg::{render, CurveFile, RenderOptions};
///
/// let curve = CurveFile::from_str(r#"
///     min_depth = 1
///     [[levels]]
///     segments = [[[0.0, 0.0], [1.0, 0.0]]]
///     [[levels]]
///     segments = [[[0.0, 0.0], [1.0, 0.0]], [[1.0, 1.0], [0.0, 1.0]]]
/// "#).unwrap();
///
/// let svg = render(&curve, &RenderOptions::new().with_depth(1));
/// assert_eq!(svg.matches("<polyline").count(), 2);
/// ```
pub fn render<C>(source: &C, options: &RenderOptions) -> String
where
    C: CurveSource + ?Sized,
{
    render_svg(source, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cross;

    impl CurveSource for Cross {
        fn min_depth(&self) -> u32 {
            2
        }

        fn segments(&self, depth: u32) -> Vec<Segment> {
            let d = f64::from(depth);
            vec![
                vec![Point::new(-d, 0.0), Point::new(d, 0.0)],
                vec![Point::new(0.0, -d), Point::new(0.0, d)],
            ]
        }
    }

    #[test]
    fn test_render_requests_min_plus_increment() {
        let svg = render(&Cross, &RenderOptions::new().with_depth(3).with_thickness(0.0));
        // depth 5: the cross spans -5..5 on both axes
        assert!(svg.contains("viewBox='-5 -5 10 10'"));
        assert!(svg.contains("<polyline points='-5,0 5,0 '/>"));
    }

    #[test]
    fn test_render_zero_depth_uses_min_depth() {
        let svg = render(&Cross, &RenderOptions::new().with_thickness(0.0));
        assert!(svg.contains("viewBox='-2 -2 4 4'"));
    }

    #[test]
    fn test_render_through_trait_object() {
        let source: &dyn CurveSource = &Cross;
        let svg = render(source, &RenderOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn test_render_is_idempotent() {
        let options = RenderOptions::new().with_depth(1).with_color("red");
        assert_eq!(render(&Cross, &options), render(&Cross, &options));
    }
}
