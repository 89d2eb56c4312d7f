//! Error types for loading curve files and render options
//!
//! Rendering itself never fails. These errors only come from the edges of the
//! crate: reading input files and the opt-in option validation.

use thiserror::Error;

/// Errors that can occur when loading a curve file
#[derive(Error, Debug)]
pub enum CurveFileError {
    #[error("Failed to read curve file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse curve TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("curve file defines no levels")]
    NoLevels,

    #[error("level {level}, segment {segment}, point {point}: expected 2 coordinates, got {len}")]
    InvalidPoint {
        level: usize,
        segment: usize,
        point: usize,
        len: usize,
    },

    #[error("{levels} levels starting at depth {min_depth} exceed the maximum depth")]
    LevelsOverflow { min_depth: u32, levels: usize },

    #[error("depth increment {increment} over minimum depth {min_depth} overflows")]
    DepthOverflow { min_depth: u32, increment: u32 },

    #[error("depth {depth} is out of range (curve provides depths {min}..={max})")]
    DepthOutOfRange { depth: u32, min: u32, max: u32 },
}

/// Errors that can occur when loading or validating render options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("thickness must be a positive finite number, got {0}")]
    InvalidThickness(f64),

    #[error("step factor must be a positive finite number, got {0}")]
    InvalidStepFactor(f64),

    #[error("padding factor must be a positive finite number, got {0}")]
    InvalidPaddingFactor(f64),
}

/// Any error produced by this crate
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Curve(#[from] CurveFileError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
