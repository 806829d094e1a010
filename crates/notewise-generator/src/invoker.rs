//! Shared backend invocation: availability check, timeout and cancellation

use crate::error::GeneratorError;
use notewise_domain::{GenerationOptions, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Calls a [`TextGenerator`] on behalf of one generator
pub(crate) struct Invoker<L> {
    llm: Arc<L>,
    timeout: Duration,
    cancel: Option<CancellationToken>,
}

impl<L> Clone for Invoker<L> {
    fn clone(&self) -> Self {
        Self {
            llm: Arc::clone(&self.llm),
            timeout: self.timeout,
            cancel: self.cancel.clone(),
        }
    }
}

impl<L: TextGenerator> Invoker<L> {
    pub(crate) fn new(llm: Arc<L>, timeout: Duration) -> Self {
        Self {
            llm,
            timeout,
            cancel: None,
        }
    }

    pub(crate) fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    /// Send `prompt` and return the non-blank response text
    pub(crate) async fn invoke(
        &self,
        prompt: &str,
        options: GenerationOptions,
    ) -> Result<String, GeneratorError> {
        if !self.llm.is_available() {
            return Err(GeneratorError::Unavailable);
        }
        if self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(GeneratorError::Cancelled);
        }

        debug!(
            prompt_bytes = prompt.len(),
            max_tokens = options.max_tokens,
            "Calling LLM"
        );

        let call = timeout(self.timeout, self.llm.generate(prompt, options));
        let outcome = match &self.cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => return Err(GeneratorError::Cancelled),
                outcome = call => outcome,
            },
            None => call.await,
        };

        let text = outcome
            .map_err(|_| GeneratorError::Timeout)?
            .map_err(|e| GeneratorError::Llm(e.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
