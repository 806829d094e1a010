//! Token-limit retry policy
//!
//! The only error worth retrying is the model refusing the requested output
//! length. One retry with a smaller budget is attempted; everything else is
//! surfaced immediately so callers can fall back.

use crate::LlmError;
use notewise_domain::GenerationOptions;
use std::future::Future;
use tracing::warn;

/// Amount subtracted from `max_tokens` before the retry
pub const TOKEN_LIMIT_DECREMENT: u32 = 200;

/// The reduced budget must stay above this value for a retry to happen
pub const TOKEN_LIMIT_FLOOR: u32 = 500;

/// Run `attempt`, retrying once with a reduced token budget on
/// [`LlmError::TokenLimitExceeded`]
///
/// At most two attempts are made. The second attempt's result, success or
/// failure, is returned as-is.
pub async fn with_token_limit_retry<F, Fut>(
    options: GenerationOptions,
    mut attempt: F,
) -> Result<String, LlmError>
where
    F: FnMut(GenerationOptions) -> Fut,
    Fut: Future<Output = Result<String, LlmError>>,
{
    match attempt(options).await {
        Err(LlmError::TokenLimitExceeded(message)) => {
            let reduced = options.max_tokens.saturating_sub(TOKEN_LIMIT_DECREMENT);
            if reduced <= TOKEN_LIMIT_FLOOR {
                return Err(LlmError::TokenLimitExceeded(message));
            }

            warn!(
                "Token limit exceeded at max_tokens={}, retrying with {}",
                options.max_tokens, reduced
            );
            attempt(options.with_max_tokens(reduced)).await
        }
        other => other,
    }
}
