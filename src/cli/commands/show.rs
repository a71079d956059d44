use crate::api::client::{ApiClient, FetchOutcome};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::{FetchSettlement, FetchTicket, ViewState};
use crate::errors::AppResult;
use crate::ui::{messages, render};

/// Handle the `show` subcommand: one lookup cycle from a fresh view state.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { batch, raw } = cmd {
        let mut state = ViewState::new();
        state.set_batch_query(batch);

        // Blank batch: no request, no state change.
        let Some(ticket) = state.submit() else {
            messages::warning("Batch code is empty, nothing to look up");
            return Ok(());
        };

        let client = ApiClient::new(cfg)?;
        let settlement = run_fetch(&client, &ticket);

        if *raw && let FetchSettlement::Rows(rows) = &settlement {
            println!("{}", serde_json::to_string_pretty(rows)?);
            return Ok(());
        }

        state.settle(&ticket, settlement);
        render::render_state(&state, ticket.batch(), cfg);
    }
    Ok(())
}

/// Execute the fetch for a ticket, folding every failure kind into a
/// settlement the state machine can apply.
pub fn run_fetch(client: &ApiClient, ticket: &FetchTicket) -> FetchSettlement {
    match client.fetch_timetable(ticket.batch()) {
        Ok(FetchOutcome::Rows(rows)) => FetchSettlement::Rows(rows),
        Ok(FetchOutcome::NotFound) => FetchSettlement::NotFound,
        Ok(FetchOutcome::ServerError(status)) => FetchSettlement::ServerError(status),
        Err(e) => FetchSettlement::Failed(e.to_string()),
    }
}
