//! API Gateway proxy events mapped onto the validation handler.
//!
//! Both HTTP API (v2, `rawQueryString`) and REST API (v1, only
//! `queryStringParameters`) payloads deserialize into [`ApiGatewayRequest`].

use crate::core::handler::{handle_extracted, CPF_PARAM};
use crate::core::{handle_validation, ValidationOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    #[serde(default)]
    pub raw_query_string: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

pub fn handle_api_gateway_request(request: &ApiGatewayRequest) -> ApiGatewayResponse {
    let outcome = match request.raw_query_string.as_deref() {
        Some(raw) => handle_validation(Some(raw)),
        None => handle_extracted(
            request
                .query_string_parameters
                .as_ref()
                .and_then(|params| params.get(CPF_PARAM))
                .cloned(),
        ),
    };

    to_response(outcome)
}

fn to_response(outcome: ValidationOutcome) -> ApiGatewayResponse {
    let status_code = outcome.status_code();
    // ValidationResponse holds only strings, serialization cannot fail
    let body = serde_json::to_string(&outcome.into_response()).unwrap_or_default();

    ApiGatewayResponse {
        status_code,
        headers: HashMap::from([(
            "content-type".to_string(),
            "application/json".to_string(),
        )]),
        body,
        is_base64_encoded: false,
    }
}
