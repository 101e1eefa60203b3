use crate::domain::cpf::is_valid_cpf;
use crate::domain::model::ValidationOutcome;
use url::form_urlencoded;

pub const CPF_PARAM: &str = "cpf";

/// Looks up the first `cpf` key in a raw query string and percent-decodes it.
/// An absent query, absent key or empty value all yield `None`.
pub fn extract_cpf(raw_query: Option<&str>) -> Option<String> {
    let query = raw_query?.trim_start_matches('?');

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == CPF_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Validates an already-extracted value. Every transport ends up here.
/// The echoed CPF is the caller's original text, not the normalized digits.
pub fn handle_extracted(cpf: Option<String>) -> ValidationOutcome {
    tracing::info!("Processing a request to validate a CPF.");

    let outcome = match cpf {
        Some(cpf) if is_valid_cpf(&cpf) => ValidationOutcome::Valid { cpf },
        _ => ValidationOutcome::Rejected,
    };
    tracing::debug!(valid = outcome.is_valid(), "CPF validation finished");
    outcome
}

/// Request path for transports that hand over the raw query string.
pub fn handle_validation(raw_query: Option<&str>) -> ValidationOutcome {
    handle_extracted(extract_cpf(raw_query))
}
