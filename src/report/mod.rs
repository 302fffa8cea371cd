//! Ranking and report output

pub mod console;
pub mod ranking;
pub mod spreadsheet;

pub use ranking::rank;
pub use spreadsheet::build_workbook;
