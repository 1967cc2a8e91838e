//! Protocol constants and the `X-PowerAuth-Authorization` header

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Protocol version
pub const VERSION: &str = "2.0";

/// Name of the HTTP header carrying the PowerAuth signature
pub const AUTH_HEADER_NAME: &str = "X-PowerAuth-Authorization";

/// Factors a signature was computed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureType {
    /// Possession factor
    Possession,
    /// Knowledge factor
    Knowledge,
    /// Biometry factor
    Biometry,
    /// Possession and knowledge factors
    PossessionKnowledge,
    /// Possession and biometry factors
    PossessionBiometry,
    /// All three factors
    PossessionKnowledgeBiometry,
}

impl SignatureType {
    /// Wire name of the signature type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Possession => "possession",
            Self::Knowledge => "knowledge",
            Self::Biometry => "biometry",
            Self::PossessionKnowledge => "possession_knowledge",
            Self::PossessionBiometry => "possession_biometry",
            Self::PossessionKnowledgeBiometry => "possession_knowledge_biometry",
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SignatureType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "possession" => Ok(Self::Possession),
            "knowledge" => Ok(Self::Knowledge),
            "biometry" => Ok(Self::Biometry),
            "possession_knowledge" => Ok(Self::PossessionKnowledge),
            "possession_biometry" => Ok(Self::PossessionBiometry),
            "possession_knowledge_biometry" => Ok(Self::PossessionKnowledgeBiometry),
            _ => Err(Error::UnknownSignatureType(value.to_string())),
        }
    }
}

impl Serialize for SignatureType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SignatureType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SignatureType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Value of the `X-PowerAuth-Authorization` header
///
/// All values are computed elsewhere; this type only renders them in the header format:
///
/// ```text
/// PowerAuth pa_activation_id="…", pa_application_key="…", pa_nonce="…",
///   pa_signature_type="…", pa_signature="…", pa_version="2.0"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationHeader {
    /// Activation Id
    pub activation_id: String,
    /// Application key
    pub application_key: String,
    /// Nonce, Base64
    pub nonce: String,
    /// Signature type
    pub signature_type: SignatureType,
    /// Signature
    pub signature: String,
}

impl AuthorizationHeader {
    /// Header key
    pub fn header_key(&self) -> &'static str {
        AUTH_HEADER_NAME
    }
}

impl fmt::Display for AuthorizationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PowerAuth pa_activation_id=\"{}\", pa_application_key=\"{}\", pa_nonce=\"{}\", pa_signature_type=\"{}\", pa_signature=\"{}\", pa_version=\"{}\"",
            self.activation_id,
            self.application_key,
            self.nonce,
            self.signature_type,
            self.signature,
            VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_type_from_str() {
        assert_eq!(
            SignatureType::from_str("possession_knowledge").unwrap(),
            SignatureType::PossessionKnowledge
        );
        assert_eq!(
            SignatureType::from_str("BIOMETRY").unwrap(),
            SignatureType::Biometry
        );
        assert_eq!(
            SignatureType::from_str("pin"),
            Err(Error::UnknownSignatureType("pin".to_string()))
        );
    }

    #[test]
    fn test_signature_type_serde() {
        let json = serde_json::to_string(&SignatureType::PossessionKnowledgeBiometry).unwrap();
        assert_eq!(json, r#""possession_knowledge_biometry""#);

        let parsed: SignatureType = serde_json::from_str(r#""knowledge""#).unwrap();
        assert_eq!(parsed, SignatureType::Knowledge);
    }

    #[test]
    fn test_authorization_header() {
        let header = AuthorizationHeader {
            activation_id: "a-1".to_string(),
            application_key: "app-key".to_string(),
            nonce: "bm9uY2U=".to_string(),
            signature_type: SignatureType::Possession,
            signature: "12345678".to_string(),
        };

        assert_eq!(header.header_key(), "X-PowerAuth-Authorization");
        assert_eq!(
            header.to_string(),
            "PowerAuth pa_activation_id=\"a-1\", pa_application_key=\"app-key\", pa_nonce=\"bm9uY2U=\", pa_signature_type=\"possession\", pa_signature=\"12345678\", pa_version=\"2.0\""
        );
    }
}
