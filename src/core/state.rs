//! View state for the interactive lookup loop.
//!
//! Models the lifecycle of one lookup cycle: a pending batch query, the
//! currently displayed rows, a loading flag, and an optional error message.
//! After every settled fetch exactly one of loading / error / rows holds
//! (or both rows and error are empty, before the first submission).

use crate::core::query::normalize_batch;
use crate::models::row::TimetableRow;

pub const NOT_FOUND_MESSAGE: &str = "Batch not found";

/// How a fetch cycle settled, from the state machine's point of view.
/// Transport, decode and timeout failures all arrive as `Failed` with the
/// message text chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchSettlement {
    Rows(Vec<TimetableRow>),
    NotFound,
    ServerError(u16),
    Failed(String),
}

/// Handle for one issued fetch. Carries the trimmed batch and a sequence
/// number used to discard settlements of superseded submissions.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    batch: String,
    seq: u64,
}

impl FetchTicket {
    pub fn batch(&self) -> &str {
        &self.batch
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    batch_query: String,
    rows: Vec<TimetableRow>,
    is_loading: bool,
    error_message: Option<String>,
    last_issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pending input unconditionally (no validation here).
    pub fn set_batch_query(&mut self, text: &str) {
        self.batch_query = text.to_string();
    }

    pub fn batch_query(&self) -> &str {
        &self.batch_query
    }

    pub fn rows(&self) -> &[TimetableRow] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Submit the pending query. A blank query (after trimming) is a no-op
    /// and leaves the state untouched. Otherwise the state enters loading,
    /// any previous error is cleared, and a ticket for the new fetch is
    /// returned.
    pub fn submit(&mut self) -> Option<FetchTicket> {
        let batch = normalize_batch(&self.batch_query)?;
        self.is_loading = true;
        self.error_message = None;
        self.last_issued += 1;
        Some(FetchTicket {
            batch,
            seq: self.last_issued,
        })
    }

    /// Apply a settled fetch outcome. Latest submission wins: if the ticket
    /// is not the most recently issued one the settlement is discarded and
    /// false is returned. Rows are cleared on every failure outcome.
    pub fn settle(&mut self, ticket: &FetchTicket, outcome: FetchSettlement) -> bool {
        if ticket.seq != self.last_issued {
            return false;
        }

        match outcome {
            FetchSettlement::Rows(rows) => {
                self.rows = rows;
                self.error_message = None;
            }
            FetchSettlement::NotFound => {
                self.rows.clear();
                self.error_message = Some(NOT_FOUND_MESSAGE.to_string());
            }
            FetchSettlement::ServerError(status) => {
                self.rows.clear();
                self.error_message = Some(format!("Server error (HTTP {})", status));
            }
            FetchSettlement::Failed(message) => {
                self.rows.clear();
                self.error_message = Some(message);
            }
        }

        self.is_loading = false;
        true
    }
}
