//! Assistant module for the Fernández Méndez & Asociados site - runs the
//! visa eligibility assessment pipeline against the Gemini API.
//!
//! The core is a single-shot request pipeline: a constrained prompt built
//! from the visitor's profile, a schema-bound `generateContent` call with
//! bounded backoff on rate limiting, and a small presentation state machine
//! that reflects the structured result (or its failure) back to the page.

pub mod ai;
pub mod contact;
pub mod error;
pub mod form;
pub mod models;
pub mod presenter;
pub mod prompts;
pub mod widget;

pub use error::{Error, Result};
