use {
    crate::domain::{
        error::GatewayError,
        secrets::{ErpCredentials, SecretStore, access_token_secret_name, client_secret_secret_name},
    },
    std::{env, future::Future, pin::Pin},
};

/// Secret store backed by process environment variables. Secret names map to
/// variables by uppercasing and replacing dashes, so
/// `fortnox-access-token-prod` resolves from `FORTNOX_ACCESS_TOKEN_PROD`.
pub struct EnvSecretStore;

impl EnvSecretStore {
    fn lookup(name: &str) -> Result<String, GatewayError> {
        let var = name.to_uppercase().replace('-', "_");
        env::var(&var).map_err(|_| GatewayError::Secrets(format!("{var} is not set")))
    }
}

impl SecretStore for EnvSecretStore {
    fn erp_credentials(
        &self,
        live: bool,
    ) -> Pin<Box<dyn Future<Output = Result<ErpCredentials, GatewayError>> + Send + '_>> {
        Box::pin(async move {
            let access_token = Self::lookup(access_token_secret_name(live))?;
            let client_secret = Self::lookup(client_secret_secret_name(live))?;
            Ok(ErpCredentials { access_token, client_secret })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_test_credentials_from_env() {
        // Safety: test-local variables, no other test reads them.
        unsafe {
            env::set_var("FORTNOX_ACCESS_TOKEN_TEST", "at-test");
            env::set_var("FORTNOX_CLIENT_SECRET_TEST", "cs-test");
        }

        let creds = EnvSecretStore.erp_credentials(false).await.unwrap();
        assert_eq!(creds.access_token, "at-test");
        assert_eq!(creds.client_secret, "cs-test");
    }

    #[tokio::test]
    async fn missing_secret_reports_variable_name() {
        unsafe {
            env::remove_var("FORTNOX_ACCESS_TOKEN_PROD");
        }

        let err = EnvSecretStore.erp_credentials(true).await.unwrap_err();
        assert!(err.to_string().contains("FORTNOX_ACCESS_TOKEN_PROD"));
    }
}
