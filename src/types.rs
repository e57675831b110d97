//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for `created_at` / `published_at` style timestamps.
pub use chrono::{DateTime, Utc};
/// Free-form JSON, used for properties and patch values the SDK does not model.
pub use serde_json::{Map, Value};
