use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

/// A movie that has not been stored yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            genre: genre.into(),
            director: director.into(),
        }
    }

    pub fn with_id(self, movie_id: i64) -> Movie {
        Movie {
            movie_id,
            title: self.title,
            release_year: self.release_year,
            genre: self.genre,
            director: self.director,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewCustomer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone,
        }
    }

    pub fn with_id(self, customer_id: i64) -> Customer {
        Customer {
            customer_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// A stored rental row. `return_date` stays `None` while the movie is out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: i64,
    pub customer_id: i64,
    pub movie_id: i64,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// A rental joined with the customer's name and the movie's title, as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub rental_id: i64,
    pub customer: String,
    pub movie: String,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}
