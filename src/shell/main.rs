use anyhow::Context;
use signup_api_tests::modules::users::use_cases::generate_user::generator::random_user;
use signup_api_tests::shared::{config, telemetry};
use signup_api_tests::shell::sign_up_client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // `.env` may carry RUST_LOG, so it is read before the subscriber is built.
    let env_file = config::load_dotenv();
    telemetry::init();
    match env_file {
        Ok(found) => tracing::debug!(found, "checked for .env file"),
        Err(e) => tracing::warn!("ignoring unreadable .env file: {}", e),
    }

    let client = sign_up_client().context("loading sign-up configuration")?;
    let user = random_user();
    tracing::info!(endpoint = %client.endpoint(), username = %user.username, "signing up random user");

    let response = client
        .submit(&user)
        .await
        .with_context(|| format!("signing up {}", user.username))?;

    tracing::info!(
        status = response.status.as_u16(),
        token_present = response.token().is_some(),
        "sign-up succeeded"
    );
    anyhow::ensure!(
        response.token().is_some(),
        "sign-up answered {} without a token",
        response.status
    );
    Ok(())
}
