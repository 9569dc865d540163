use super::types::GenerationRequest;

/// Prompt sent to the generation endpoint ("generate a snake game project").
pub const DEFAULT_QUESTION: &str = "生成一个贪吃蛇项目";

/// Language the service is asked to generate the project in.
pub const DEFAULT_LANGUAGE: &str = "python";

/// User-Agent header value, kept identical to the Apifox collection export.
pub const USER_AGENT: &str = "Apifox/1.0.0 (https://apifox.com)";

/// Path of the generation endpoint.
pub const GENERATE_PATH: &str = "/generate";

/// Build the fixed smoke-test request.
pub fn default_request() -> GenerationRequest {
    GenerationRequest {
        question: DEFAULT_QUESTION.to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
    }
}

/// Serialize a request to its compact JSON wire form.
///
/// The output carries no timestamps, nonces, or random fields: the same
/// request always serializes to the same bytes.
pub fn serialize_payload(request: &GenerationRequest) -> Result<String, String> {
    serde_json::to_string(request).map_err(|e| format!("Failed to serialize payload: {e}"))
}

/// Join the generation endpoint path onto a base URL.
///
/// Trailing slashes on the base are collapsed so `http://host/` and
/// `http://host` produce the same URL.
pub fn generate_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_payload_exact_bytes() {
        let payload = serialize_payload(&default_request()).unwrap();

        assert_eq!(
            payload,
            "{\"question\":\"生成一个贪吃蛇项目\",\"language\":\"python\"}"
        );
    }

    #[test]
    fn test_serialize_payload_parses_back_to_expected_object() {
        let payload = serialize_payload(&default_request()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "question": "生成一个贪吃蛇项目",
                "language": "python",
            })
        );
    }

    #[test]
    fn test_serialize_payload_is_deterministic() {
        let first = serialize_payload(&default_request()).unwrap();
        let second = serialize_payload(&default_request()).unwrap();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_serialize_payload_custom_request() {
        let request = GenerationRequest {
            question: "write a parser".to_string(),
            language: "rust".to_string(),
        };

        let payload = serialize_payload(&request).unwrap();
        assert_eq!(payload, r#"{"question":"write a parser","language":"rust"}"#);
    }

    #[test]
    fn test_default_request_fields() {
        let request = default_request();

        assert_eq!(request.question, DEFAULT_QUESTION);
        assert_eq!(request.language, "python");
    }

    #[test]
    fn test_generate_url_plain_base() {
        assert_eq!(
            generate_url("http://127.0.0.1:8000"),
            "http://127.0.0.1:8000/generate"
        );
    }

    #[test]
    fn test_generate_url_trailing_slash() {
        assert_eq!(
            generate_url("http://127.0.0.1:8000/"),
            "http://127.0.0.1:8000/generate"
        );
    }

    #[test]
    fn test_generate_url_many_trailing_slashes() {
        assert_eq!(
            generate_url("http://localhost:9000///"),
            "http://localhost:9000/generate"
        );
    }
}
