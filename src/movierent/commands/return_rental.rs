use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, rental_id: i64, on: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !store.return_movie(rental_id, on)? {
        result.add_message(CmdMessage::warning(format!(
            "Rental {rental_id} not found or already returned"
        )));
        return Ok(result);
    }

    info!(rental_id, "movie returned");
    result.add_message(CmdMessage::success(format!(
        "Rental {rental_id} returned on {on}"
    )));
    if let Some(rental) = store.get_rental(rental_id)? {
        result.affected_rentals.push(rental);
    }
    Ok(result)
}
