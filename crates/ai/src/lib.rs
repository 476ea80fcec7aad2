//! Learning-trail generation over an OpenAI-compatible chat-completions API.
//!
//! [`client`] wraps the HTTP endpoint; [`generator`] turns a student
//! profile into a parsed [`schoolhub_core::trail::TrailPlan`] behind the
//! [`generator::TrailGenerator`] trait so the server can swap in a
//! disabled or test implementation.

pub mod client;
pub mod config;
pub mod generator;

pub use client::{AiError, Completion, CompletionClient};
pub use config::AiConfig;
pub use generator::{
    build_trail_generator, DisabledTrailGenerator, GeneratedTrail, OpenAiTrailGenerator,
    TrailGenerator,
};
