use thiserror::Error;

/// Failures along the credential-mint, token-exchange and delivery chain.
///
/// Every variant is terminal for the current invocation; callers surface
/// the message text and never retry.
#[derive(Debug, Error)]
pub enum FcmError {
    #[error("failed to parse service account private key: {0}")]
    KeyParse(#[source] jsonwebtoken::errors::Error),

    #[error("failed to sign assertion: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),

    #[error("token exchange request failed: {0}")]
    TokenRequest(#[source] reqwest::Error),

    #[error("token exchange rejected with status {status}: {body}")]
    TokenRejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse token response: {0}")]
    TokenParse(#[source] reqwest::Error),

    #[error("FCM send request failed: {0}")]
    SendRequest(#[source] reqwest::Error),

    #[error("failed to read FCM response body: {0}")]
    ResponseRead(#[source] reqwest::Error),
}
