use std::env;

/// Deployment-time constants, injected into each component at construction.
/// Values come from the environment where set, with the production defaults
/// below otherwise.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Catalog article every invoice line is booked under.
    pub article_number: String,
    /// Settlement currency on created customers.
    pub settlement_currency: String,
    /// Country code that classifies a customer as domestic VAT.
    pub home_country: String,
    pub email_from: String,
    pub email_bcc: String,
    pub email_subject: String,
    pub erp_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            article_number: "4501".to_string(),
            settlement_currency: "EUR".to_string(),
            home_country: "SE".to_string(),
            email_from: "finance@flexinets.eu".to_string(),
            email_bcc: "finance@flexinets.eu".to_string(),
            email_subject: "Flexinets Invoice/Order Receipt {no}".to_string(),
            erp_base_url: "https://api.fortnox.se/3".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            article_number: env_or("FORTNOX_ARTICLE_NUMBER", defaults.article_number),
            settlement_currency: env_or("SETTLEMENT_CURRENCY", defaults.settlement_currency),
            home_country: env_or("HOME_COUNTRY", defaults.home_country),
            email_from: env_or("FINANCE_EMAIL_FROM", defaults.email_from),
            email_bcc: env_or("FINANCE_EMAIL_BCC", defaults.email_bcc),
            email_subject: env_or("FINANCE_EMAIL_SUBJECT", defaults.email_subject),
            erp_base_url: env_or("FORTNOX_BASE_URL", defaults.erp_base_url),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}
