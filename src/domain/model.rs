use serde::{Deserialize, Serialize};

pub const VALID_MESSAGE: &str = "CPF is valid.";
pub const INVALID_MESSAGE: &str = "Invalid CPF format or CPF not provided.";

/// JSON body returned by every validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

/// Verdict for one request. Missing, malformed and bad-checksum input all
/// collapse into `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Carries the CPF exactly as the caller sent it, separators included.
    Valid { cpf: String },
    Rejected,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ValidationOutcome::Valid { .. } => 200,
            ValidationOutcome::Rejected => 400,
        }
    }

    pub fn into_response(self) -> ValidationResponse {
        match self {
            ValidationOutcome::Valid { cpf } => ValidationResponse {
                message: VALID_MESSAGE.to_string(),
                cpf: Some(cpf),
            },
            ValidationOutcome::Rejected => ValidationResponse {
                message: INVALID_MESSAGE.to_string(),
                cpf: None,
            },
        }
    }
}
