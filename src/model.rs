use serde::{Deserialize, Serialize};

// wire schema for the /summarize endpoint.

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    // a missing field is handled the same as empty text: rejected
    // during validation, before any model call.
    #[serde(default)]
    pub text: String
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String
}

impl SummarizeResponse {
    pub fn new(summary: String) -> Self {
        SummarizeResponse {
            summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_text_defaults_to_empty() {
        let request: SummarizeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.text, "");
    }

    #[test]
    fn test_request_text_roundtrip() {
        let request: SummarizeRequest =
            serde_json::from_str(r#"{"text": "some article"}"#).unwrap();
        assert_eq!(request.text, "some article");
    }

    #[test]
    fn test_response_shape() {
        let response = SummarizeResponse::new("short version".to_string());
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"summary":"short version"}"#);
    }
}
