//! Main content panels.
//!
//! - [`balance`] - Available balance card
//! - [`ledger`] - Recent transactions list

pub mod balance;
pub mod ledger;
