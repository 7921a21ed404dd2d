pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;

use std::sync::Arc;

use crate::{config::GatewayConfig, domain::secrets::SecretStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub secrets: Arc<dyn SecretStore>,
}
