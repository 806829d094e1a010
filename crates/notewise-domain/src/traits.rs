//! Trait definitions for external interactions
//!
//! These traits define the boundaries between generation logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::GenerationOptions;
use std::future::Future;

/// Trait for text-generation backends
///
/// Implemented by the infrastructure layer (notewise-llm)
pub trait TextGenerator: Send + Sync {
    /// Error type for generation operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the backend is configured well enough to be worth calling
    ///
    /// Callers must not call [`TextGenerator::generate`] when this is false.
    fn is_available(&self) -> bool;

    /// Generate a completion for `prompt`, returning the trimmed text
    fn generate(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
