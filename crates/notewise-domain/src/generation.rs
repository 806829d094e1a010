//! Generation parameters and result provenance

/// Sampling parameters for a single text-generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature
    pub temperature: f32,

    /// Upper bound on generated output tokens
    pub max_tokens: u32,
}

impl GenerationOptions {
    /// Create generation options
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    /// Copy of these options with a different token budget
    pub fn with_max_tokens(self, max_tokens: u32) -> Self {
        Self { max_tokens, ..self }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(0.7, 1000)
    }
}

/// Where a generated result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationSource {
    /// Produced by the external text-generation backend
    Ai,

    /// Produced by the local deterministic fallback
    Fallback,

    /// Input was empty; nothing was generated
    Skipped,
}

impl GenerationSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationSource::Ai => "ai",
            GenerationSource::Fallback => "fallback",
            GenerationSource::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for GenerationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
