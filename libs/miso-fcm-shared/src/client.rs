use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use tracing::debug;

use crate::credentials::ServiceAccountKey;
use crate::errors::FcmError;
use crate::models::{FcmMessage, TokenClaims, TokenResponse};

const DEFAULT_ENDPOINT: &str = "https://fcm.googleapis.com";
const MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const GRANT_TYPE_JWT_BEARER: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Firebase Cloud Messaging Client
///
/// Exchanges a service account key for an OAuth2 access token and delivers
/// one message over the FCM HTTP v1 API. The token is fetched fresh for each
/// send; this client is built for a single-shot process, not a long-lived
/// service, so there is no token cache.
pub struct FcmClient {
    project_id: String,
    credentials: ServiceAccountKey,
    endpoint: String,
    http_client: reqwest::Client,
}

impl FcmClient {
    /// Create a new FCM client.
    ///
    /// # Arguments
    /// * `project_id` - Firebase project ID
    /// * `credentials` - Service account key with OAuth2 credentials
    pub fn new(project_id: impl Into<String>, credentials: ServiceAccountKey) -> Self {
        Self {
            project_id: project_id.into(),
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Override the FCM API endpoint. Used by tests to target a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Get an access token from the service account key.
    ///
    /// Builds an RS256-signed JWT assertion and exchanges it at the
    /// credential's token endpoint via the OAuth2 JWT-bearer grant.
    pub async fn get_access_token(&self) -> Result<String, FcmError> {
        let now = Utc::now();
        let claims = TokenClaims {
            iss: self.credentials.client_email.clone(),
            sub: self.credentials.client_email.clone(),
            scope: MESSAGING_SCOPE.to_string(),
            aud: self.credentials.token_uri.clone(),
            exp: (now + Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.credentials.private_key.as_bytes())
            .map_err(FcmError::KeyParse)?;

        let assertion = encode(&Header::new(jsonwebtoken::Algorithm::RS256), &claims, &encoding_key)
            .map_err(FcmError::JwtEncode)?;

        debug!(
            token_uri = %self.credentials.token_uri,
            "Exchanging service account assertion for access token"
        );

        let params = [
            ("grant_type", GRANT_TYPE_JWT_BEARER),
            ("assertion", &assertion),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(FcmError::TokenRequest)?;

        if !response.status().is_success() {
            return Err(FcmError::TokenRequestFailed(response.status()));
        }

        let token_response: TokenResponse =
            response.json().await.map_err(FcmError::TokenParse)?;

        Ok(token_response.access_token)
    }

    /// Send one message and return the raw response body.
    ///
    /// The HTTP status is not interpreted: any response the server produces
    /// is handed back verbatim for the caller to print. Only transport-level
    /// failures (DNS, refused connection, timeout) are errors.
    pub async fn send(&self, message: &FcmMessage) -> Result<String, FcmError> {
        let access_token = self.get_access_token().await?;

        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.endpoint, self.project_id
        );

        debug!(%url, "Posting FCM message");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .map_err(FcmError::SendRequest)?;

        response.text().await.map_err(FcmError::SendRequest)
    }
}
