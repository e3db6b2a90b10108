//! Shared utility helpers.

pub mod error;
pub(crate) mod hex;

pub use error::{MicroDetectError, Result as MicroDetectResult};
