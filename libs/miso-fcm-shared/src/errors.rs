use thiserror::Error;

/// FCM Client Error Types
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("Failed to read service account file: {0}")]
    CredentialsRead(#[source] std::io::Error),

    #[error("Failed to parse service account file: {0}")]
    CredentialsParse(#[source] serde_json::Error),

    #[error("Failed to parse private key: {0}")]
    KeyParse(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to encode JWT: {0}")]
    JwtEncode(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to get access token: {0}")]
    TokenRequest(#[source] reqwest::Error),

    #[error("Token request failed with status: {0}")]
    TokenRequestFailed(reqwest::StatusCode),

    #[error("Failed to parse token response: {0}")]
    TokenParse(#[source] reqwest::Error),

    #[error("FCM send request failed: {0}")]
    SendRequest(#[source] reqwest::Error),
}
