//! SVG generation from curve segments

use crate::curve::CurveSource;
use crate::geometry::{Point, Segment, Viewport};

use super::format::format_number;
use super::RenderOptions;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build the SVG document incrementally
pub struct SvgBuilder<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl<'a> SvgBuilder<'a> {
    /// Create a new SVG builder
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.options.precision)
    }

    fn newline(&mut self) {
        if self.options.pretty_print {
            self.out.push('\n');
        }
    }

    /// Open the root element
    pub fn open(&mut self, view: &Viewport) {
        let view_box = format!(
            "{} {} {} {}",
            self.num(view.x),
            self.num(view.y),
            self.num(view.width),
            self.num(view.height)
        );
        self.out.push_str(&format!(
            "<svg xmlns='{}' viewBox='{}'>",
            SVG_NAMESPACE, view_box
        ));
        self.newline();
    }

    /// Add the shared polyline style rule
    pub fn add_style(&mut self, stroke_width: f64) {
        let rule = format!(
            "polyline {{ fill: none; stroke-linecap: square; stroke-width: {}; stroke: {}; }}",
            self.num(stroke_width),
            self.options.color
        );
        self.out
            .push_str(&format!("<defs><style>{rule}</style></defs>"));
        self.newline();
    }

    /// Add one polyline; every `x,y` pair is followed by a space
    pub fn add_polyline(&mut self, points: &[Point]) {
        let mut pairs = String::new();
        for p in points {
            pairs.push_str(&format!("{},{} ", self.num(p.x), self.num(p.y)));
        }
        self.out.push_str(&format!("<polyline points='{}'/>", pairs));
        self.newline();
    }

    /// Close the root element and return the document
    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>");
        self.out
    }
}

/// Render a segment set that is already in hand
pub fn render_segments(segments: &[Segment], options: &RenderOptions) -> String {
    let view = Viewport::from_segments(segments, options.thickness, options.padding_factor);
    let stroke_width = options.thickness * view.width / options.step_factor;

    tracing::debug!(
        segments = segments.len(),
        points = segments.iter().map(Vec::len).sum::<usize>(),
        ?view,
        stroke_width,
        "rendering svg"
    );

    let mut builder = SvgBuilder::new(options);
    builder.open(&view);
    builder.add_style(stroke_width);
    for segment in segments {
        builder.add_polyline(segment);
    }
    builder.finish()
}

/// Render a curve source to SVG at `min_depth + options.depth`
///
/// The sum saturates at `u32::MAX` instead of overflowing.
pub fn render_svg<C>(source: &C, options: &RenderOptions) -> String
where
    C: CurveSource + ?Sized,
{
    let depth = source.min_depth().saturating_add(options.depth);
    tracing::debug!(depth, min_depth = source.min_depth(), "requesting segments");
    let segments = source.segments(depth);
    render_segments(&segments, options)
}
