//! Core library for labpair.
//!
//! Splits the active teams of one lab section into evenly sized, id-ordered
//! groups and assigns each group to a staff member, rotating the staff list
//! by an offset so ownership can shift between terms.
//!
//! - `models`: team records and raw spreadsheet rows
//! - `roster`, `partition`, `rotation`, `summary`: the pairing steps
//! - `pairing`: the pipeline from raw rows to report rows
//! - `report`: CSV rendering
//! - `workbook`: teamset export parsing
//! - `api`: the Bottlenose HTTP client

pub mod api;
pub mod error;
pub mod models;
pub mod pairing;
pub mod partition;
pub mod report;
pub mod roster;
pub mod rotation;
pub mod summary;
pub mod utils;
pub mod workbook;

pub use error::{CoreError, CoreResult};
pub use pairing::{pair_teams, PairingReport, PairingRequest};
