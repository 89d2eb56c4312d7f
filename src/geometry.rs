//! Core geometry types and viewport computation

/// Extra room around the stroke's own half-width so strokes are never clipped
pub const PADDING_FACTOR: f64 = 1.5;

/// A 2D point in the curve's native coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One continuously drawn stroke; point order determines connectivity
pub type Segment = Vec<Point>;

/// The visible coordinate rectangle of an SVG document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Compute the padded bounding viewport of a segment set.
    ///
    /// The running min/max start at zero rather than at the first point, so
    /// the result always contains the origin. Each side is then pushed out by
    /// `thickness * padding_factor / 2`.
    pub fn from_segments(segments: &[Segment], thickness: f64, padding_factor: f64) -> Self {
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for point in segments.iter().flatten() {
            x_min = x_min.min(point.x);
            x_max = x_max.max(point.x);
            y_min = y_min.min(point.y);
            y_max = y_max.max(point.y);
        }

        let edge = thickness * padding_factor / 2.0;
        let (x_min, y_min) = (x_min - edge, y_min - edge);
        let (x_max, y_max) = (x_max + edge, y_max + edge);

        Self::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this viewport contains a point (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}
