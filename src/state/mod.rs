pub mod account_store;

pub use account_store::{Account, AccountStore};
