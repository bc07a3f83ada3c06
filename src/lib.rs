//! Shakti Bridge — seller qualification and listing engine.
//!
//! Validates seller identity formats, derives buyer prices via a bounded
//! randomized markup, and produces bilingual marketing portfolios through a
//! multimodal generative service with a deterministic local fallback.

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod identity;
pub mod model;
pub mod onboarding;
pub mod pricing;
