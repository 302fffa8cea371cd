//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod outreach;
pub mod pipeline;
pub mod profile;
pub mod report;
pub mod scoring;

pub use config::Config;
pub use error::{Result, ScreenerError};
