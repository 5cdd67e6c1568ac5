//! MonMaker Shared - request and response bodies for the engine's HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, serde_json and the domain crate
//! 2. **No business logic** - pure data types and serialization
//! 3. **Wire names are stable** - field names match what the editor frontend sends

pub mod requests;
pub mod responses;

pub use requests::{ExportFormatQuery, GenerateContentRequest, ValidateQuery, DEFAULT_MODEL_TAG};
pub use responses::{
    ErrorBody, GenerateContentResponse, NextIdResponse, PluginListResponse, WelcomeResponse,
};

// The validation report is returned verbatim; re-export so clients need one crate
pub use monmaker_domain::{GameData, ValidationReport};
