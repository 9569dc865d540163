/// Build the request diagnostic line shown in verbose mode.
pub fn describe_request(url: &str, payload_len: usize) -> String {
    format!("POST {url} ({payload_len} byte payload)")
}

/// Build the response diagnostic line shown in verbose mode.
///
/// The status code is reported but never acted on; the body is passed
/// through verbatim either way.
pub fn describe_response(status: u16, body_len: usize) -> String {
    format!("Response: HTTP {status} ({body_len} bytes)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request() {
        let line = describe_request("http://127.0.0.1:8000/generate", 62);

        assert_eq!(line, "POST http://127.0.0.1:8000/generate (62 byte payload)");
    }

    #[test]
    fn test_describe_response_ok() {
        assert_eq!(describe_response(200, 15), "Response: HTTP 200 (15 bytes)");
    }

    #[test]
    fn test_describe_response_server_error() {
        assert_eq!(describe_response(500, 4), "Response: HTTP 500 (4 bytes)");
    }
}
