#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the render pipeline.
pub mod error;

/// greyscale conversion module.
pub mod gray;

/// glyph ramp and text rendering module.
pub mod glyph;

/// module containing parallelization utilities.
pub mod parallel;

/// conversion pipeline orchestration module.
pub mod pipeline;

/// tile averaging module.
pub mod tile;

pub use crate::error::RenderError;
