use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// FCM Message Request
///
/// The HTTP v1 request envelope: `{"message": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct FcmMessage {
    pub message: MessageBody,
}

/// FCM Message Content
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub token: String,
    pub data: NotificationData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<Value>,
}

/// Notification data payload
#[derive(Debug, Clone, Serialize)]
pub struct NotificationData {
    pub title: String,
    pub body: String,
}

/// JWT Claims for the Google OAuth2 service account assertion
#[derive(Debug, Serialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub scope: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

/// Google OAuth2 Token Response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

impl FcmMessage {
    /// Build the common notification message for one device.
    ///
    /// The body carries the current Unix time in milliseconds so repeated
    /// sends are distinguishable on the receiving device.
    pub fn common(device_token: &str) -> Self {
        Self {
            message: MessageBody {
                token: device_token.to_string(),
                data: NotificationData {
                    title: "Title FCM Notification".to_string(),
                    body: format!("Notification from FCM {}", Utc::now().timestamp_millis()),
                },
                android: None,
                apns: None,
            },
        }
    }

    /// Build the common message with platform-specific delivery overrides:
    /// a badge and delivery priority for iOS, a launch intent for Android.
    pub fn with_platform_overrides(device_token: &str) -> Self {
        let mut fcm_message = Self::common(device_token);

        fcm_message.message.apns = Some(json!({
            "payload": {
                "aps": {
                    "badge": 1
                }
            },
            "headers": {
                "apns-priority": "10"
            }
        }));

        fcm_message.message.android = Some(json!({
            "notification": {
                "click_action": "android.intent.action.MAIN"
            }
        }));

        fcm_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_timestamp(body: &str) -> Option<i64> {
        body.rsplit(' ').next().and_then(|s| s.parse().ok())
    }

    #[test]
    fn test_common_message_fields() {
        let message = FcmMessage::common("device-token-123");

        assert_eq!(message.message.token, "device-token-123");
        assert!(!message.message.data.title.is_empty());
        assert!(!message.message.data.body.is_empty());
        assert!(message.message.android.is_none());
        assert!(message.message.apns.is_none());

        let ts = body_timestamp(&message.message.data.body)
            .expect("body should end with a millisecond timestamp");
        assert!(ts > 0);
    }

    #[test]
    fn test_common_message_serialization_shape() {
        let message = FcmMessage::common("abc123");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["message"]["token"], "abc123");
        assert_eq!(value["message"]["data"]["title"], "Title FCM Notification");
        assert!(value["message"]["data"]["body"]
            .as_str()
            .unwrap()
            .starts_with("Notification from FCM "));

        // Platform blocks must be absent, not null, in the common message.
        let body = value["message"].as_object().unwrap();
        assert!(!body.contains_key("android"));
        assert!(!body.contains_key("apns"));
    }

    #[test]
    fn test_override_message_is_superset_of_common() {
        let message = FcmMessage::with_platform_overrides("device-token-123");
        let value = serde_json::to_value(&message).unwrap();

        // Common fields survive unchanged.
        assert_eq!(value["message"]["token"], "device-token-123");
        assert_eq!(value["message"]["data"]["title"], "Title FCM Notification");

        // Exactly the documented platform override fields are added.
        assert_eq!(
            value["message"]["android"]["notification"]["click_action"],
            "android.intent.action.MAIN"
        );
        assert_eq!(value["message"]["apns"]["payload"]["aps"]["badge"], 1);
        assert_eq!(value["message"]["apns"]["headers"]["apns-priority"], "10");

        assert_eq!(
            value["message"]["android"]["notification"]
                .as_object()
                .unwrap()
                .len(),
            1
        );
        assert_eq!(value["message"]["apns"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_token_response_parsing() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token": "ya29.token", "expires_in": 3599, "token_type": "Bearer"}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "ya29.token");
    }
}
