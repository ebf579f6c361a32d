use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub fn customer<S: DataStore>(store: &mut S, customer_id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove_customer(customer_id)? {
        info!(customer_id, "customer removed");
        result.add_message(CmdMessage::success(format!(
            "Customer {customer_id} and their rental history removed"
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Customer {customer_id} not found"
        )));
    }
    Ok(result)
}
