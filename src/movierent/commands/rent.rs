use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConstraintKind, Result};
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::info;

use super::helpers::recover_constraint;

pub fn movie<S: DataStore>(
    store: &mut S,
    customer_id: i64,
    movie_id: i64,
    on: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let outcome = recover_constraint(
        store.rent_movie(customer_id, movie_id, on),
        |kind| match kind {
            ConstraintKind::ForeignKey => Some(format!(
                "Cannot rent: customer {customer_id} or movie {movie_id} does not exist"
            )),
            _ => None,
        },
    )?;

    match outcome {
        Ok(rental) => {
            info!(rental_id = rental.rental_id, "movie rented");
            result.add_message(CmdMessage::success(format!(
                "Rental {} created: movie {} to customer {} on {}",
                rental.rental_id, movie_id, customer_id, rental.rental_date
            )));
            result.affected_rentals.push(rental);
        }
        Err(message) => result.add_message(message),
    }
    Ok(result)
}
