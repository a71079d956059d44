use std::io::{self, BufRead, Write};

use crate::api::client::ApiClient;
use crate::cli::commands::show::run_fetch;
use crate::config::Config;
use crate::core::state::ViewState;
use crate::errors::AppResult;
use crate::ui::{messages, render};
use crate::utils::formatting::bold;

/// Handle the `shell` subcommand: an interactive lookup loop.
///
/// One view state lives for the whole session; blank input is ignored and
/// simply re-prompts, `exit`/`quit` (or EOF) leaves the loop.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    messages::info(format!(
        "Connected to {} — enter a batch code (e.g. F7), or 'exit' to quit",
        client.base_url()
    ));

    let mut state = ViewState::new();
    let stdin = io::stdin();

    loop {
        print!("{} ", bold("batch>"));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().eq_ignore_ascii_case("exit") || input.trim().eq_ignore_ascii_case("quit") {
            break;
        }

        state.set_batch_query(input);
        let Some(ticket) = state.submit() else {
            continue;
        };

        let settlement = run_fetch(&client, &ticket);
        state.settle(&ticket, settlement);
        render::render_state(&state, ticket.batch(), cfg);
    }

    println!("Bye 👋");
    Ok(())
}
