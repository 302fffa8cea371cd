//! Resume screener: batch resume to job-description screening tool

use clap::Parser;
use log::{error, info};
use resume_screener::cli::{Cli, Commands, ConfigAction};
use resume_screener::config::Config;
use resume_screener::error::{Result, ScreenerError};
use resume_screener::input::InputManager;
use resume_screener::outreach;
use resume_screener::pipeline::{self, JobDescription};
use resume_screener::report::{self, console};
use resume_screener::scoring::Scorer;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            job,
            resumes,
            strategy,
            output,
            top,
            drafts,
            detailed,
        } => {
            let strategy = strategy.unwrap_or(config.scoring.default_strategy);
            info!("Screening {} resumes with the {} strategy", resumes.len(), strategy);

            println!("📋 Job description: {}", job.display());
            println!("📄 Resumes: {}", resumes.len());
            println!("🧮 Strategy: {}", strategy);

            let mut input_manager = InputManager::new();

            let job_text = input_manager.extract_text(&job).await?;
            if job_text.trim().is_empty() {
                return Err(ScreenerError::InvalidInput(format!(
                    "Job description has no usable content: {}",
                    job.display()
                )));
            }
            let job_description = JobDescription::new(job_text);

            let mut scorer = Scorer::from_config(strategy, &config)?;

            let records = pipeline::screen(
                &job_description,
                &resumes,
                &mut scorer,
                &mut input_manager,
                true,
            )
            .await;

            let mut ranked = report::rank(records);
            if let Some(top) = top {
                ranked.truncate(top);
            }

            console::print_ranked_table(
                &ranked,
                &job_description,
                config.scoring.shortlist_threshold,
                detailed,
            );

            let output_path = output.unwrap_or_else(|| default_output_path(&config));
            let buffer = report::build_workbook(&ranked, &config.output.sheet_name)?;
            std::fs::write(&output_path, buffer)?;
            println!("\n💾 Report written to {}", output_path.display());

            if let Some(drafts_dir) = drafts {
                let shortlisted: Vec<_> = ranked
                    .iter()
                    .filter(|r| r.score() >= config.scoring.shortlist_threshold)
                    .cloned()
                    .collect();
                let written =
                    outreach::write_email_drafts(&shortlisted, &job_description, &drafts_dir)?;
                println!(
                    "✉️  {} email draft(s) written to {}",
                    written,
                    drafts_dir.display()
                );
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ScreenerError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("# {}\n{}", Config::config_path().display(), content);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

fn default_output_path(config: &Config) -> PathBuf {
    if config.output.timestamped_filenames {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("screening_{}.xlsx", timestamp))
    } else {
        PathBuf::from("screening_report.xlsx")
    }
}
