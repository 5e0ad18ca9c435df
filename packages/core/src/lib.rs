//! Core library of the CodeQuest platform: the pure transformation layer
//! between fetched data (users, lessons, problems, billing state) and the
//! views the frontend renders.
//!
//! Everything in here is synchronous and side effect free. Callers fetch the
//! underlying records first and hand them in fully materialized; the
//! functions return freshly allocated results and never mutate their inputs.

pub mod access;
pub mod billing;
pub mod config;
pub mod curriculum;
pub mod db;
pub mod problems;
pub mod progress;
pub mod subscription;
