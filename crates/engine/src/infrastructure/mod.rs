//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus the
//! document codec used by import and export.

pub mod codec;
pub mod gemini;
pub mod plugins;
pub mod ports;
