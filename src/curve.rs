//! Curve sources supplying segment sets by recursion depth
//!
//! The renderer does not know how a curve is generated. It only needs a
//! [`CurveSource`]: something with a minimum viable depth that can produce
//! the segments of the curve at any absolute depth.
//!
//! [`CurveFile`] is a source backed by precomputed levels stored in TOML:
//!
//! ```toml
//! name = "square"
//! min_depth = 1
//!
//! [[levels]]
//! segments = [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::CurveFileError;
use crate::geometry::{Point, Segment};

/// A generator of curve geometry
pub trait CurveSource {
    /// The smallest depth that yields a non-degenerate curve
    fn min_depth(&self) -> u32;

    /// The segments making up the curve at an absolute depth
    fn segments(&self, depth: u32) -> Vec<Segment>;
}

impl<T: CurveSource + ?Sized> CurveSource for &T {
    fn min_depth(&self) -> u32 {
        (**self).min_depth()
    }

    fn segments(&self, depth: u32) -> Vec<Segment> {
        (**self).segments(depth)
    }
}

impl<T: CurveSource + ?Sized> CurveSource for Box<T> {
    fn min_depth(&self) -> u32 {
        (**self).min_depth()
    }

    fn segments(&self, depth: u32) -> Vec<Segment> {
        (**self).segments(depth)
    }
}

/// A curve whose levels were computed ahead of time
#[derive(Debug, Clone)]
pub struct CurveFile {
    /// Optional name for the curve
    pub name: Option<String>,
    min_depth: u32,
    max_depth: u32,
    /// `levels[i]` holds the segments at depth `min_depth + i`
    levels: Vec<Vec<Segment>>,
}

/// TOML structure for deserializing curve files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCurve {
    name: Option<String>,
    #[serde(default)]
    min_depth: u32,
    #[serde(default)]
    levels: Vec<TomlLevel>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLevel {
    segments: Vec<Vec<Vec<f64>>>,
}

impl CurveFile {
    /// Build a curve from levels already in memory
    pub fn new(min_depth: u32, levels: Vec<Vec<Segment>>) -> Result<Self, CurveFileError> {
        if levels.is_empty() {
            return Err(CurveFileError::NoLevels);
        }
        let max_depth = u32::try_from(levels.len() - 1)
            .ok()
            .and_then(|extra| min_depth.checked_add(extra))
            .ok_or(CurveFileError::LevelsOverflow {
                min_depth,
                levels: levels.len(),
            })?;
        Ok(Self {
            name: None,
            min_depth,
            max_depth,
            levels,
        })
    }

    /// Load a curve from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CurveFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a curve from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CurveFileError> {
        let parsed: TomlCurve = toml::from_str(content)?;

        let mut levels = Vec::with_capacity(parsed.levels.len());
        for (level, toml_level) in parsed.levels.into_iter().enumerate() {
            let mut segments = Vec::with_capacity(toml_level.segments.len());
            for (segment, points) in toml_level.segments.into_iter().enumerate() {
                let points = points
                    .into_iter()
                    .enumerate()
                    .map(|(point, coords)| match coords[..] {
                        [x, y] => Ok(Point::new(x, y)),
                        _ => Err(CurveFileError::InvalidPoint {
                            level,
                            segment,
                            point,
                            len: coords.len(),
                        }),
                    })
                    .collect::<Result<Segment, _>>()?;
                segments.push(points);
            }
            levels.push(segments);
        }

        let mut curve = Self::new(parsed.min_depth, levels)?;
        curve.name = parsed.name;
        Ok(curve)
    }

    /// The deepest level this curve provides
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Resolve a depth increment to an absolute depth with a stored level
    pub fn resolve_depth(&self, increment: u32) -> Result<u32, CurveFileError> {
        let depth = self
            .min_depth
            .checked_add(increment)
            .ok_or(CurveFileError::DepthOverflow {
                min_depth: self.min_depth,
                increment,
            })?;
        self.check_depth(depth)?;
        Ok(depth)
    }

    /// Check that an absolute depth has a stored level
    pub fn check_depth(&self, depth: u32) -> Result<(), CurveFileError> {
        if depth < self.min_depth || depth > self.max_depth {
            return Err(CurveFileError::DepthOutOfRange {
                depth,
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }
}

impl CurveSource for CurveFile {
    fn min_depth(&self) -> u32 {
        self.min_depth
    }

    /// Depths without a stored level yield an empty segment set
    fn segments(&self, depth: u32) -> Vec<Segment> {
        depth
            .checked_sub(self.min_depth)
            .and_then(|i| self.levels.get(i as usize))
            .cloned()
            .unwrap_or_default()
    }
}
