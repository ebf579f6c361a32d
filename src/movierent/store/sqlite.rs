use super::{ClearReport, DataStore};
use crate::error::Result;
use crate::model::{Customer, Movie, NewCustomer, NewMovie, Rental, RentalRecord};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_MOVIES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS movies (
        movie_id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(trim(title)) > 0),
        release_year INTEGER NOT NULL,
        genre TEXT NOT NULL,
        director TEXT NOT NULL
    )";

const CREATE_CUSTOMERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE CHECK (length(trim(email)) > 0),
        phone TEXT
    )";

const CREATE_RENTALS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS rentals (
        rental_id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL REFERENCES customers (customer_id) ON DELETE CASCADE,
        movie_id INTEGER NOT NULL REFERENCES movies (movie_id),
        rental_date DATE NOT NULL,
        return_date DATE
    )";

/// SQLite-backed store. Owns the single connection used for the whole run.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %path.display(), "opening database");
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Foreign keys are off by default in SQLite and must be enabled per connection.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// How long a statement waits on a lock held by another process before failing.
    pub fn with_busy_timeout(self, timeout: Duration) -> Result<Self> {
        self.conn.busy_timeout(timeout)?;
        Ok(self)
    }
}

fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        movie_id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
        genre: row.get(3)?,
        director: row.get(4)?,
    })
}

fn customer_from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        customer_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}

fn rental_from_row(row: &Row<'_>) -> rusqlite::Result<Rental> {
    Ok(Rental {
        rental_id: row.get(0)?,
        customer_id: row.get(1)?,
        movie_id: row.get(2)?,
        rental_date: row.get(3)?,
        return_date: row.get(4)?,
    })
}

fn rental_record_from_row(row: &Row<'_>) -> rusqlite::Result<RentalRecord> {
    Ok(RentalRecord {
        rental_id: row.get(0)?,
        customer: row.get(1)?,
        movie: row.get(2)?,
        rental_date: row.get(3)?,
        return_date: row.get(4)?,
    })
}

impl DataStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        for ddl in [
            CREATE_MOVIES_TABLE,
            CREATE_CUSTOMERS_TABLE,
            CREATE_RENTALS_TABLE,
        ] {
            self.conn.execute(ddl, [])?;
        }
        info!("schema ready");
        Ok(())
    }

    fn insert_movie(&mut self, movie: NewMovie) -> Result<Movie> {
        debug!(title = %movie.title, "inserting movie");
        self.conn.execute(
            "INSERT INTO movies (title, release_year, genre, director) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.release_year, movie.genre, movie.director],
        )?;
        Ok(movie.with_id(self.conn.last_insert_rowid()))
    }

    fn list_movies(&self) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(
            "SELECT movie_id, title, release_year, genre, director FROM movies ORDER BY movie_id",
        )?;
        let movies = stmt
            .query_map([], movie_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    fn insert_customer(&mut self, customer: NewCustomer) -> Result<Customer> {
        debug!(email = %customer.email, "inserting customer");
        self.conn.execute(
            "INSERT INTO customers (first_name, last_name, email, phone) VALUES (?1, ?2, ?3, ?4)",
            params![
                customer.first_name,
                customer.last_name,
                customer.email,
                customer.phone
            ],
        )?;
        Ok(customer.with_id(self.conn.last_insert_rowid()))
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        let mut stmt = self.conn.prepare(
            "SELECT customer_id, first_name, last_name, email, phone
             FROM customers ORDER BY customer_id",
        )?;
        let customers = stmt
            .query_map([], customer_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = customers.len(), "listed customers");
        Ok(customers)
    }

    fn update_customer_email(&mut self, customer_id: i64, email: &str) -> Result<bool> {
        debug!(customer_id, email, "updating customer email");
        let changed = self.conn.execute(
            "UPDATE customers SET email = ?1 WHERE customer_id = ?2",
            params![email, customer_id],
        )?;
        Ok(changed > 0)
    }

    fn remove_customer(&mut self, customer_id: i64) -> Result<bool> {
        debug!(customer_id, "removing customer");
        let changed = self.conn.execute(
            "DELETE FROM customers WHERE customer_id = ?1",
            params![customer_id],
        )?;
        Ok(changed > 0)
    }

    fn rent_movie(&mut self, customer_id: i64, movie_id: i64, on: NaiveDate) -> Result<Rental> {
        debug!(customer_id, movie_id, %on, "renting movie");
        self.conn.execute(
            "INSERT INTO rentals (customer_id, movie_id, rental_date, return_date)
             VALUES (?1, ?2, ?3, NULL)",
            params![customer_id, movie_id, on],
        )?;
        Ok(Rental {
            rental_id: self.conn.last_insert_rowid(),
            customer_id,
            movie_id,
            rental_date: on,
            return_date: None,
        })
    }

    fn return_movie(&mut self, rental_id: i64, on: NaiveDate) -> Result<bool> {
        debug!(rental_id, %on, "returning movie");
        let changed = self.conn.execute(
            "UPDATE rentals SET return_date = ?1 WHERE rental_id = ?2 AND return_date IS NULL",
            params![on, rental_id],
        )?;
        Ok(changed > 0)
    }

    fn list_rentals(&self) -> Result<Vec<RentalRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT r.rental_id,
                    c.first_name || ' ' || c.last_name,
                    m.title,
                    r.rental_date,
                    r.return_date
             FROM rentals r
             JOIN customers c ON c.customer_id = r.customer_id
             JOIN movies m ON m.movie_id = r.movie_id
             ORDER BY r.rental_date DESC, r.rental_id DESC",
        )?;
        let rentals = stmt
            .query_map([], rental_record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = rentals.len(), "listed rentals");
        Ok(rentals)
    }

    fn get_rental(&self, rental_id: i64) -> Result<Option<Rental>> {
        let rental = self
            .conn
            .query_row(
                "SELECT rental_id, customer_id, movie_id, rental_date, return_date
                 FROM rentals WHERE rental_id = ?1",
                params![rental_id],
                rental_from_row,
            )
            .optional()?;
        Ok(rental)
    }

    fn clear_all(&mut self) -> Result<ClearReport> {
        let rentals = self.conn.execute("DELETE FROM rentals", [])?;
        let customers = self.conn.execute("DELETE FROM customers", [])?;
        let movies = self.conn.execute("DELETE FROM movies", [])?;
        let report = ClearReport {
            rentals,
            customers,
            movies,
        };
        info!(?report, "cleared all tables");
        Ok(report)
    }
}
