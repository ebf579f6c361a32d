use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ConstraintKind, Result};
use crate::store::DataStore;
use tracing::info;

use super::helpers::recover_constraint;

pub fn email<S: DataStore>(store: &mut S, customer_id: i64, new_email: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let outcome = recover_constraint(
        store.update_customer_email(customer_id, new_email),
        |kind| match kind {
            ConstraintKind::Unique => Some(format!(
                "A customer with email {new_email} already exists"
            )),
            ConstraintKind::Check => Some("Customer email cannot be empty".to_string()),
            _ => None,
        },
    )?;

    match outcome {
        Ok(true) => {
            info!(customer_id, "customer email updated");
            result.add_message(CmdMessage::success(format!(
                "Customer {customer_id} email updated to {new_email}"
            )));
        }
        Ok(false) => {
            result.add_message(CmdMessage::warning(format!(
                "Customer {customer_id} not found"
            )));
        }
        Err(message) => result.add_message(message),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{insert, list, MessageLevel};
    use crate::model::NewCustomer;
    use crate::store::sqlite::SqliteStore;

    fn store_with_two_customers() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        insert::customer(
            &mut store,
            NewCustomer::new("John", "Doe", "john@example.com", Some("555".into())),
        )
        .unwrap();
        insert::customer(
            &mut store,
            NewCustomer::new("Jane", "Roe", "jane@example.com", None),
        )
        .unwrap();
        store
    }

    #[test]
    fn changes_only_the_target_email() {
        let mut store = store_with_two_customers();
        let before = list::customers(&store).unwrap().listed_customers;

        let result = email(&mut store, 1, "johnny@example.com").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let after = list::customers(&store).unwrap().listed_customers;
        assert_eq!(after[0].email, "johnny@example.com");
        assert_eq!(after[0].first_name, before[0].first_name);
        assert_eq!(after[0].last_name, before[0].last_name);
        assert_eq!(after[0].phone, before[0].phone);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn missing_customer_is_not_found() {
        let mut store = store_with_two_customers();
        let before = list::customers(&store).unwrap().listed_customers;

        let result = email(&mut store, 99, "ghost@example.com").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("not found"));
        assert_eq!(list::customers(&store).unwrap().listed_customers, before);
    }

    #[test]
    fn taken_email_is_rejected() {
        let mut store = store_with_two_customers();
        let result = email(&mut store, 2, "john@example.com").unwrap();
        assert!(result.has_errors());
        let after = list::customers(&store).unwrap().listed_customers;
        assert_eq!(after[1].email, "jane@example.com");
    }

    #[test]
    fn blank_email_is_rejected() {
        let mut store = store_with_two_customers();
        let result = email(&mut store, 1, "").unwrap();
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Customer email cannot be empty");
        let after = list::customers(&store).unwrap().listed_customers;
        assert_eq!(after[0].email, "john@example.com");
    }
}
