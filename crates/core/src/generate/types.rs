use serde::{Deserialize, Serialize};

/// A request for the code generation endpoint.
///
/// Serde serializes struct fields in declaration order, so `question` must
/// stay ahead of `language` to keep the wire body stable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Natural-language prompt describing what to generate.
    pub question: String,
    /// Target programming language for the generated code.
    pub language: String,
}
