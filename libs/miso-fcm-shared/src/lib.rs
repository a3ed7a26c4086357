/// Miso FCM Shared Library
///
/// This library provides a Firebase Cloud Messaging (FCM) HTTP v1 client
/// for sending a push notification to a single device.
///
/// It handles:
/// - Loading a Google service account credential file
/// - OAuth2 access token generation from the service account key
/// - Building the notification message payload, with optional
///   platform-specific overrides for Android and iOS
/// - Message delivery over HTTPS

pub mod client;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use config::{Environment, PushConfig};
pub use credentials::ServiceAccountKey;
pub use errors::FcmError;
pub use models::FcmMessage;
