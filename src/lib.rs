//! Carteira is the core of a local-first personal finance tracker: users log
//! income and expense records, see aggregate highlights, and view a
//! per-category breakdown of a month's expenses.
//!
//! Everything is stored on-device in a key-value store (one JSON blob per
//! user); there is no server and no sync. The crate exposes three screen
//! controllers that mirror the app's screens:
//!
//! - [dashboard]: highlight cards and the transaction list,
//! - [register]: form validation and record creation,
//! - [resume]: the monthly category breakdown.
//!
//! The layers underneath ([store], [ledger], [aggregate], [format]) can be
//! used directly by shells that bring their own UI.

#![warn(missing_docs)]

pub mod aggregate;
pub mod category;
pub mod dashboard;
mod error;
pub mod format;
pub mod ledger;
pub mod record;
pub mod register;
pub mod resume;
pub mod session;
pub mod store;

pub use error::{Error, ValidationError};
