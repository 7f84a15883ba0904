//! Data models for roster entities.
//!
//! - `Team`: a validated student team
//! - `RawTeamRow`, `CellValue`: the untyped row shape read from the export

pub mod team;

pub use team::{CellValue, RawTeamRow, Team};
