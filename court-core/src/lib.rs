//! # court-core
//!
//! Core types and traits for the courtroom debate orchestration.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the
//! orchestration and model crates:
//!
//! - [`RoleSpec`] - An immutable persona bound to one participant
//! - [`Transcript`] / [`Turn`] - The append-only debate history
//! - [`Verdict`] - The judge's closing output
//! - [`TextGeneration`] - The injected text-generation capability
//! - [`CourtError`] / [`Result`] - Unified error handling
//!
//! Each debate run owns its transcript exclusively; nothing here is
//! shared across concurrent runs or persisted across restarts.

pub mod error;
pub mod generation;
pub mod role;
pub mod transcript;

pub use error::{CourtError, Result};
pub use generation::TextGeneration;
pub use role::RoleSpec;
pub use transcript::{Transcript, Turn, Verdict};
