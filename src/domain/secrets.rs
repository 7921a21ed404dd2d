use {
    super::error::GatewayError,
    std::{future::Future, pin::Pin},
};

/// Per-environment Fortnox credential pair, attached as fixed request
/// headers by the gateway client.
#[derive(Debug, Clone)]
pub struct ErpCredentials {
    pub access_token: String,
    pub client_secret: String,
}

pub fn access_token_secret_name(live: bool) -> &'static str {
    if live { "fortnox-access-token-prod" } else { "fortnox-access-token-test" }
}

pub fn client_secret_secret_name(live: bool) -> &'static str {
    if live { "fortnox-client-secret-prod" } else { "fortnox-client-secret-test" }
}

/// The secret-loading collaborator. Which credential set to load is driven
/// by the livemode flag on the inbound event, not by the caller's own
/// environment.
pub trait SecretStore: Send + Sync {
    fn erp_credentials(
        &self,
        live: bool,
    ) -> Pin<Box<dyn Future<Output = Result<ErpCredentials, GatewayError>> + Send + '_>>;
}
