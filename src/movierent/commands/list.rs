use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn movies<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_movies(store.list_movies()?))
}

pub fn customers<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_customers(store.list_customers()?))
}

pub fn rentals<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_rentals(store.list_rentals()?))
}
