//! CLI interface for the resume screener

use crate::scoring::StrategyKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Batch resume to job-description screening tool")]
#[command(
    long_about = "Score a batch of resumes (PDF, DOCX, TXT, MD) against one job description, \
                  extract contact and profile fields, and export the ranked report as a spreadsheet"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen a batch of resumes against a job description
    Screen {
        /// Path to the job description file (TXT, MD, PDF, DOCX)
        #[arg(short, long)]
        job: PathBuf,

        /// Resume files to screen
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Scoring strategy for this ranking pass
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Where to write the xlsx report (defaults to a timestamped name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only keep the top N candidates in the report
        #[arg(long)]
        top: Option<usize>,

        /// Write outreach email drafts for shortlisted candidates here
        #[arg(long)]
        drafts: Option<PathBuf>,

        /// Print per-candidate field details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}
