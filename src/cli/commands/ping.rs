use crate::api::client::ApiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `ping` subcommand: check the server's health route.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;

    match client.health()? {
        true => {
            messages::success(format!("Server at {} is up", client.base_url()));
        }
        false => {
            messages::warning(format!(
                "Server at {} answered, but did not report a healthy status",
                client.base_url()
            ));
        }
    }

    Ok(())
}
