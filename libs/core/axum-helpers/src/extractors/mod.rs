//! Extractors that reject with [`AppError`](crate::AppError) so every
//! malformed request gets the standard error body.

pub mod params;
pub mod validated_json;

pub use params::{PathParam, QueryParams};
pub use validated_json::{JsonBody, ValidatedJson};
