use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("event decode: {0}")]
    EventDecode(String),

    /// Non-success response from Fortnox. Carries the response body and the
    /// serialized outgoing request so the failing call can be reproduced.
    #[error("erp request failed with status {status}: {body}")]
    ErpRequest {
        status: u16,
        body: String,
        request: String,
    },

    #[error("no erp customer found for source id {0}")]
    CustomerNotFound(String),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("secret store: {0}")]
    Secrets(String),
}
