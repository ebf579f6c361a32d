use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.clear_all()?;
    let mut result = CmdResult::default();
    if report.total() == 0 {
        result.add_message(CmdMessage::info("Nothing to clear"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Cleared {} rentals, {} customers, {} movies",
            report.rentals, report.customers, report.movies
        )));
    }
    Ok(result.with_cleared(report))
}
