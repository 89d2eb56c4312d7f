//! Configuration for SVG rendering

use std::path::Path;

use serde::Deserialize;

use crate::error::OptionsError;
use crate::geometry::PADDING_FACTOR;

/// Nominal distance between adjacent curve vertices at depth 0.
///
/// The stroke width is `thickness * viewport.width / STEP_FACTOR`, which keeps
/// strokes visually proportional whatever the recursion depth.
pub const STEP_FACTOR: f64 = 100.0;

/// Options for a single render call
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Recursion depth added to the curve source's minimum depth
    pub depth: u32,

    /// Stroke thickness, in the curve's native coordinate units
    pub thickness: f64,

    /// Stroke color, inserted into the stylesheet verbatim.
    ///
    /// The token is not escaped. Never pass untrusted input here: a value
    /// containing `<` or `}` can break out of the style rule.
    pub color: String,

    /// Number of decimal places for every emitted number
    pub precision: usize,

    /// Divisor relating viewport width to stroke width
    pub step_factor: f64,

    /// Multiplier on the stroke half-width used as viewport padding
    pub padding_factor: f64,

    /// Whether to put each element on its own line
    pub pretty_print: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: 0,
            thickness: 1.0,
            color: "black".to_string(),
            precision: 3,
            step_factor: STEP_FACTOR,
            padding_factor: PADDING_FACTOR,
            pretty_print: true,
        }
    }
}

impl RenderOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string; missing keys take their defaults
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the depth increment
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the stroke thickness
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the stroke color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the step factor
    pub fn with_step_factor(mut self, step_factor: f64) -> Self {
        self.step_factor = step_factor;
        self
    }

    /// Set the padding factor
    pub fn with_padding_factor(mut self, padding_factor: f64) -> Self {
        self.padding_factor = padding_factor;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Check the numeric preconditions of the renderer.
    ///
    /// The renderer never calls this: out-of-domain options simply produce
    /// out-of-domain output. Callers that prefer to fail fast opt in here.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(OptionsError::InvalidThickness(self.thickness));
        }
        if !(self.step_factor.is_finite() && self.step_factor > 0.0) {
            return Err(OptionsError::InvalidStepFactor(self.step_factor));
        }
        if !(self.padding_factor.is_finite() && self.padding_factor > 0.0) {
            return Err(OptionsError::InvalidPaddingFactor(self.padding_factor));
        }
        Ok(())
    }
}
