//! Session setup and initialization

use crate::api::AdminApiClient;
use crate::config::Config;
use crate::environment::Environment;
use std::error::Error;
use std::path::Path;

/// Everything a dashboard or headless command needs to talk to the API.
#[derive(Debug)]
pub struct SessionData {
    /// The environment requests go to.
    pub environment: Environment,
    /// Client carrying the configured token.
    pub client: AdminApiClient,
}

/// Resolves which server to talk to and builds the client.
///
/// The URL comes from, in order: `--api-url`, the config file, the named
/// environment, production.
pub fn setup_session(
    config_path: &Path,
    api_url_override: Option<&str>,
    named_environment: Option<&str>,
) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::load_or_default(config_path)
        .map_err(|e| format!("Failed to load config from {}: {}", config_path.display(), e))?;
    let environment =
        Environment::resolve(api_url_override, config.api_url(), named_environment);
    log::debug!("Using {:?}", environment);

    let client = AdminApiClient::new(
        environment.clone(),
        config.auth_token().map(str::to_string),
    )?;
    Ok(SessionData {
        environment,
        client,
    })
}
