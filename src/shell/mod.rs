// Composition root: reads configuration from the environment and builds the
// sign-up client the binary and the live test suite share.

use crate::modules::users::use_cases::sign_up::client::SignUpClient;
use crate::shared::config::{ConfigError, SignUpConfig};

pub fn sign_up_client() -> Result<SignUpClient, ConfigError> {
    let config = SignUpConfig::shared()?;
    tracing::debug!(endpoint = %config.endpoint(), "sign-up client configured");
    Ok(SignUpClient::new(config))
}
