use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConstraintKind, Result};
use crate::model::{NewCustomer, NewMovie};
use crate::store::DataStore;
use tracing::info;

use super::helpers::recover_constraint;

pub fn movie<S: DataStore>(store: &mut S, movie: NewMovie) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let outcome = recover_constraint(store.insert_movie(movie), |kind| match kind {
        ConstraintKind::Check => Some("Movie title cannot be empty".to_string()),
        _ => None,
    })?;

    match outcome {
        Ok(movie) => {
            info!(movie_id = movie.movie_id, "movie added");
            result.add_message(CmdMessage::success(format!(
                "Movie added ({}): {} ({})",
                movie.movie_id, movie.title, movie.release_year
            )));
            result.affected_movies.push(movie);
        }
        Err(message) => result.add_message(message),
    }
    Ok(result)
}

pub fn customer<S: DataStore>(store: &mut S, customer: NewCustomer) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let email = customer.email.clone();
    let outcome = recover_constraint(store.insert_customer(customer), |kind| match kind {
        ConstraintKind::Unique => Some(format!("A customer with email {email} already exists")),
        ConstraintKind::Check => Some("Customer email cannot be empty".to_string()),
        _ => None,
    })?;

    match outcome {
        Ok(customer) => {
            info!(customer_id = customer.customer_id, "customer added");
            result.add_message(CmdMessage::success(format!(
                "Customer added ({}): {}",
                customer.customer_id,
                customer.full_name()
            )));
            result.affected_customers.push(customer);
        }
        Err(message) => result.add_message(message),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::store::sqlite::SqliteStore;

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        store
    }

    #[test]
    fn adds_movie_with_exact_fields() {
        let mut store = store();
        let before = list::movies(&store).unwrap().listed_movies.len();
        let result = movie(
            &mut store,
            NewMovie::new("Inception", 2010, "Sci-Fi", "Christopher Nolan"),
        )
        .unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.affected_movies[0].movie_id, 1);

        let listed = list::movies(&store).unwrap().listed_movies;
        assert_eq!(listed.len(), before + 1);
        let m = &listed[0];
        assert_eq!(m.title, "Inception");
        assert_eq!(m.release_year, 2010);
        assert_eq!(m.genre, "Sci-Fi");
        assert_eq!(m.director, "Christopher Nolan");
    }

    #[test]
    fn empty_title_is_reported() {
        let mut store = store();
        let result = movie(&mut store, NewMovie::new("", 2001, "Drama", "Nobody")).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Movie title cannot be empty");
        assert!(list::movies(&store).unwrap().listed_movies.is_empty());
    }

    #[test]
    fn blank_email_is_reported() {
        let mut store = store();
        let result = customer(&mut store, NewCustomer::new("Jane", "Doe", "", None)).unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Customer email cannot be empty");
        assert!(list::customers(&store).unwrap().listed_customers.is_empty());
    }

    #[test]
    fn duplicate_email_does_not_grow_customers() {
        let mut store = store();
        customer(
            &mut store,
            NewCustomer::new("John", "Doe", "john@example.com", None),
        )
        .unwrap();
        let result = customer(
            &mut store,
            NewCustomer::new("Johnny", "Dough", "john@example.com", None),
        )
        .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("already exists"));
        assert!(result.affected_customers.is_empty());
        assert_eq!(list::customers(&store).unwrap().listed_customers.len(), 1);
    }
}
