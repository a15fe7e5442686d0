use serde::{Deserialize, Serialize};

/// Uniform envelope every backend JSON response follows. `success: false`
/// with a 200 status means the request reached the server but was rejected
/// (e.g. a bad reservation code); the rejection reason is in `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_envelope() {
        let json = r#"{"success":true,"data":{"value":3},"message":"ok"}"#;
        #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
        struct Payload {
            value: u32,
        }
        let parsed: ApiResponse<Payload> = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.unwrap().value, 3);
        assert_eq!(parsed.message.as_deref(), Some("ok"));
        assert!(parsed.error.is_none());
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let json = r#"{"success":false}"#;
        let parsed: ApiResponse<()> = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert!(parsed.message.is_none());
        assert!(parsed.data.is_none());
    }
}
