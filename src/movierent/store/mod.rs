//! # Storage Layer
//!
//! This module defines the storage abstraction for movierent. The [`DataStore`]
//! trait is the seam between the command layer and the relational store.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: SQLite database (file-backed in production,
//!   `:memory:` in tests)
//!
//! ## Tables
//!
//! ```text
//! movies     (movie_id, title, release_year, genre, director)
//! customers  (customer_id, first_name, last_name, email UNIQUE, phone)
//! rentals    (rental_id, customer_id -> customers ON DELETE CASCADE,
//!             movie_id -> movies, rental_date, return_date)
//! ```
//!
//! Every write is a single statement that commits on its own. Rentals depend on
//! customers and movies, never the reverse, so anything that empties tables
//! removes rentals first.

use crate::error::Result;
use crate::model::{Customer, Movie, NewCustomer, NewMovie, Rental, RentalRecord};
use chrono::NaiveDate;

pub mod sqlite;

/// Rows removed by [`DataStore::clear_all`], per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClearReport {
    pub rentals: usize,
    pub customers: usize,
    pub movies: usize,
}

impl ClearReport {
    pub fn total(&self) -> usize {
        self.rentals + self.customers + self.movies
    }
}

/// Abstract interface for the rental records.
pub trait DataStore {
    /// Create the movies, customers and rentals tables if they are missing.
    fn ensure_schema(&self) -> Result<()>;

    fn insert_movie(&mut self, movie: NewMovie) -> Result<Movie>;

    /// All movies in insertion order.
    fn list_movies(&self) -> Result<Vec<Movie>>;

    fn insert_customer(&mut self, customer: NewCustomer) -> Result<Customer>;

    /// All customers ordered by id.
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Returns `false` when no customer has this id.
    fn update_customer_email(&mut self, customer_id: i64, email: &str) -> Result<bool>;

    /// Deletes the customer and, through the cascade, its rentals.
    /// Returns `false` when no customer has this id.
    fn remove_customer(&mut self, customer_id: i64) -> Result<bool>;

    fn rent_movie(&mut self, customer_id: i64, movie_id: i64, on: NaiveDate) -> Result<Rental>;

    /// Sets the return date of an outstanding rental.
    /// Returns `false` when the rental is missing or already returned.
    fn return_movie(&mut self, rental_id: i64, on: NaiveDate) -> Result<bool>;

    /// Rentals joined with customer name and movie title, newest first.
    fn list_rentals(&self) -> Result<Vec<RentalRecord>>;

    fn get_rental(&self, rental_id: i64) -> Result<Option<Rental>>;

    /// Empties rentals, then customers, then movies.
    fn clear_all(&mut self) -> Result<ClearReport>;
}
