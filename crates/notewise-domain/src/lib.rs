//! Notewise Domain Layer
//!
//! This crate contains the vocabulary shared by every other Notewise crate.
//! It has ZERO external dependencies and defines the option value objects,
//! generation parameters, and the trait boundary to text-generation backends.
//!
//! ## Key Concepts
//!
//! - **Summary options**: requested length (`short`/`medium`/`long`/`auto`) and
//!   rendering format (`paragraph`/`bullet_points`)
//! - **Quiz options**: difficulty tier and question type mix
//! - **Generation source**: whether a result came from the AI backend, the
//!   local fallback, or was skipped because the input was empty
//! - **TextGenerator**: the seam between generation logic and the network
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure value types only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generation;
pub mod options;
pub mod traits;

// Re-exports for convenience
pub use generation::{GenerationOptions, GenerationSource};
pub use options::{Difficulty, QuizType, SummaryFormat, SummaryLength};
pub use traits::TextGenerator;
