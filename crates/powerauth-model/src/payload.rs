//! Payload data-transfer types
//!
//! All cryptographic values are carried as opaque Base64 strings. They are produced and
//! consumed by the encryption layer; this crate only moves them across the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Encrypted payload not bound to any activation
///
/// Used to transport data to and from the server before a device is activated, e.g. while
/// creating an activation. Only `encryptedData` and `mac` are mandatory on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonPersonalizedEncryptedPayload {
    /// Application key identifying the client application
    #[serde(default)]
    pub application_key: String,
    /// Session index used to derive the session key
    #[serde(default)]
    pub session_index: String,
    /// Ad-hoc index used to derive the encryption key
    #[serde(default)]
    pub ad_hoc_index: String,
    /// MAC index used to derive the MAC key
    #[serde(default)]
    pub mac_index: String,
    /// Nonce
    #[serde(default)]
    pub nonce: String,
    /// Ephemeral public key of the sender
    #[serde(default)]
    pub ephemeral_public_key: String,
    /// MAC of the encrypted data
    pub mac: String,
    /// Encrypted data
    pub encrypted_data: String,
}

/// Activation status request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatusRequest {
    /// Activation Id
    pub activation_id: String,
}

impl ActivationStatusRequest {
    /// Create new [`ActivationStatusRequest`]
    pub fn new<S>(activation_id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            activation_id: activation_id.into(),
        }
    }
}

/// Activation status response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatusResponse {
    /// Activation Id
    pub activation_id: String,
    /// Encrypted status blob, Base64
    pub encrypted_status_blob: String,
    /// Application specific data attached by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_object: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_names() {
        let payload = NonPersonalizedEncryptedPayload {
            application_key: "key".to_string(),
            session_index: "session".to_string(),
            ad_hoc_index: "adhoc".to_string(),
            mac_index: "macidx".to_string(),
            nonce: "nonce".to_string(),
            ephemeral_public_key: "epk".to_string(),
            mac: "mac".to_string(),
            encrypted_data: "data".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "applicationKey": "key",
                "sessionIndex": "session",
                "adHocIndex": "adhoc",
                "macIndex": "macidx",
                "nonce": "nonce",
                "ephemeralPublicKey": "epk",
                "mac": "mac",
                "encryptedData": "data"
            })
        );
    }

    #[test]
    fn test_payload_optional_fields() {
        let payload: NonPersonalizedEncryptedPayload =
            serde_json::from_str(r#"{"mac": "bWFj", "encryptedData": "ZGF0YQ=="}"#).unwrap();

        assert_eq!(payload.mac, "bWFj");
        assert_eq!(payload.encrypted_data, "ZGF0YQ==");
        assert!(payload.application_key.is_empty());
        assert!(payload.ephemeral_public_key.is_empty());
    }

    #[test]
    fn test_payload_requires_encrypted_data() {
        let result: Result<NonPersonalizedEncryptedPayload, _> =
            serde_json::from_str(r#"{"mac": "bWFj"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_activation_status_response() {
        let response: ActivationStatusResponse = serde_json::from_str(
            r#"{"activationId": "a-1", "encryptedStatusBlob": "YmxvYg==", "customObject": {"k": 1}}"#,
        )
        .unwrap();

        assert_eq!(response.activation_id, "a-1");
        assert_eq!(
            response.custom_object.and_then(|o| o.get("k").cloned()),
            Some(serde_json::json!(1))
        );

        let without_custom: ActivationStatusResponse =
            serde_json::from_str(r#"{"activationId": "a-1", "encryptedStatusBlob": "YmxvYg=="}"#)
                .unwrap();
        assert!(without_custom.custom_object.is_none());
    }
}
