//! # court-model
//!
//! Text-generation backends implementing the [`court_core::TextGeneration`]
//! capability: the Gemini generateContent client used in production and a
//! scripted deterministic double for tests and offline runs.

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiClient;
pub use scripted::ScriptedGeneration;
