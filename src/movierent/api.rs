//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! rental operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the store (one connection for the life of the process)
//! - **Dispatches** each verb to its command function
//! - **Supplies today's date** for rentals and returns
//!
//! It does no I/O and no formatting; callers get a `Result<CmdResult>` back.
//!
//! `RentalApi<S: DataStore>` is generic over the storage backend, so tests can
//! hand it an in-memory SQLite store.

use crate::commands;
use crate::error::Result;
use crate::model::{NewCustomer, NewMovie};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct RentalApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RentalApi<S> {
    /// Wraps a store, creating the schema if it does not exist yet.
    pub fn new(store: S) -> Result<Self> {
        store.ensure_schema()?;
        Ok(Self { store })
    }

    pub fn insert_movie(&mut self, movie: NewMovie) -> Result<CmdResult> {
        commands::insert::movie(&mut self.store, movie)
    }

    pub fn insert_customer(&mut self, customer: NewCustomer) -> Result<CmdResult> {
        commands::insert::customer(&mut self.store, customer)
    }

    pub fn list_movies(&self) -> Result<CmdResult> {
        commands::list::movies(&self.store)
    }

    pub fn list_customers(&self) -> Result<CmdResult> {
        commands::list::customers(&self.store)
    }

    pub fn list_rentals(&self) -> Result<CmdResult> {
        commands::list::rentals(&self.store)
    }

    pub fn update_customer_email(&mut self, customer_id: i64, email: &str) -> Result<CmdResult> {
        commands::update::email(&mut self.store, customer_id, email)
    }

    pub fn remove_customer(&mut self, customer_id: i64) -> Result<CmdResult> {
        commands::remove::customer(&mut self.store, customer_id)
    }

    pub fn rent_movie(&mut self, customer_id: i64, movie_id: i64) -> Result<CmdResult> {
        commands::rent::movie(&mut self.store, customer_id, movie_id, today())
    }

    pub fn return_movie(&mut self, rental_id: i64) -> Result<CmdResult> {
        commands::return_rental::run(&mut self.store, rental_id, today())
    }

    pub fn clear_all(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }
}

/// The local calendar day, used as rental and return date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
