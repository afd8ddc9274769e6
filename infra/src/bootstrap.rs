//! Assembly of the login flow from configuration

use std::sync::Arc;
use tracing::info;

use cs_core::services::{LoginSession, MessageTable, ResultProjection};
use cs_shared::{telemetry, AppConfig};

use crate::http::HttpAuthRepository;
use crate::InfrastructureError;

/// Everything a login screen needs, wired to the HTTP backend
pub struct LoginComponents {
    /// Coordinator driving validation and submits
    pub session: Arc<LoginSession<HttpAuthRepository>>,
    /// Projection using the configured language
    pub projection: ResultProjection,
}

/// Build the login flow from an already loaded configuration
///
/// Installs the tracing subscriber (if none is installed yet), creates the
/// HTTP repository and a message table for the configured language.
pub fn initialize(config: &AppConfig) -> Result<LoginComponents, InfrastructureError> {
    telemetry::init_tracing(&config.logging);

    let repository = Arc::new(HttpAuthRepository::new(&config.auth_client)?);
    let session = Arc::new(LoginSession::new(repository));
    let projection = ResultProjection::new(MessageTable::for_language(config.language));

    info!(
        environment = %config.environment,
        language = %config.language,
        login_url = %config.auth_client.login_url(),
        "Login flow initialized"
    );

    Ok(LoginComponents {
        session,
        projection,
    })
}

/// Load configuration (`.env`, config file, `COFFEESHOP__*` variables) and build the login flow
pub fn initialize_from_env() -> Result<LoginComponents, InfrastructureError> {
    let config = AppConfig::load()?;
    initialize(&config)
}
