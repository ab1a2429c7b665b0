pub mod ledger;
pub mod log;
pub mod view;

pub use ledger::{Ledger, STORAGE_KEY};
