//! Shared plumbing for the CodeQuest crates: the common `Result`/`Error`
//! types, JSON helpers and id generation.

pub use anyhow::{Error, Result, anyhow, bail};

pub mod json {
    pub use serde_json::{
        Map, Number, Value, from_slice, from_str, from_value, json, to_string, to_string_pretty,
        to_value, to_vec,
    };
}

/// Collision resistant id for derived records and error reports.
pub fn create_id() -> String {
    cuid2::create_id()
}
