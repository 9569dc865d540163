pub mod payload;
pub mod report;
pub mod types;

pub use payload::{
    default_request, generate_url, serialize_payload, DEFAULT_LANGUAGE, DEFAULT_QUESTION,
    GENERATE_PATH, USER_AGENT,
};
pub use report::{describe_request, describe_response};
pub use types::GenerationRequest;
