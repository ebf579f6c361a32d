use crate::model::{Customer, Movie, Rental, RentalRecord};
use crate::store::ClearReport;

pub mod clear;
pub mod helpers;
pub mod insert;
pub mod list;
pub mod remove;
pub mod rent;
pub mod return_rental;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of a single command: the records it touched or listed plus
/// user-facing messages. Not-found and rejected writes are messages, not errors.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub affected_customers: Vec<Customer>,
    pub affected_rentals: Vec<Rental>,
    pub listed_movies: Vec<Movie>,
    pub listed_customers: Vec<Customer>,
    pub listed_rentals: Vec<RentalRecord>,
    pub cleared: Option<ClearReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<Customer>) -> Self {
        self.listed_customers = customers;
        self
    }

    pub fn with_listed_rentals(mut self, rentals: Vec<RentalRecord>) -> Self {
        self.listed_rentals = rentals;
        self
    }

    pub fn with_cleared(mut self, report: ClearReport) -> Self {
        self.cleared = Some(report);
        self
    }

    /// True when a write was rejected by the store.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
