//! resume-intake: validate a resume and job description and run the analysis

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_intake::analysis::{AnalysisClient, MockAnalysisService};
use resume_intake::cli::{Cli, Commands, ConfigAction, JobInput, ResumeInput};
use resume_intake::config::{Config, OutputFormat};
use resume_intake::input::{FileCandidate, Normalizer, Role};
use resume_intake::notifier::{
    ConsoleNotifier, IntakeOutcome, LogNotifier, Notification, Notifier,
};
use resume_intake::output::formatter::{parse_output_format, save_report_to_file};
use resume_intake::output::{AnalysisReport, ReportGenerator};
use resume_intake::session::IntakeSession;
use resume_intake::{IntakeError, Result};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Check { file, mime } => check_file(&file, mime.as_deref(), &config),
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
        } => analyze(resume, job, output, detailed, save, &config).await,
        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config)?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(config_path)?;
                    println!("Configuration reset: {}", config_path.display());
                }
                ConfigAction::Path => println!("{}", config_path.display()),
            }
            Ok(())
        }
    }
}

fn check_file(path: &Path, mime: Option<&str>, config: &Config) -> Result<()> {
    let notifier = ConsoleNotifier::new(config.output.color_output);
    let candidate = FileCandidate::from_path(path, mime)?;
    let normalizer = Normalizer::new(config.intake.clone());

    match normalizer.validate_file(candidate) {
        Ok(doc) => {
            println!(
                "{} ({}, {:.2} MB)",
                doc.name(),
                doc.file_type(),
                doc.size_mb()
            );
            notifier.notify(Notification::for_outcome(&IntakeOutcome::Accepted {
                name: doc.name().to_string(),
            }));
            Ok(())
        }
        Err(reason) => {
            notifier.notify(Notification::for_outcome(&IntakeOutcome::Rejected {
                attempted_name: reason.attempted_name().map(str::to_string),
                reason: reason.clone(),
            }));
            Err(reason.into())
        }
    }
}

fn intake(
    session: &mut IntakeSession,
    role: Role,
    path: Option<PathBuf>,
    text: Option<String>,
    mime: Option<String>,
) -> Result<()> {
    let event = match (path, text) {
        (Some(path), _) => {
            let candidate = FileCandidate::from_path(&path, mime.as_deref())?;
            session.pick_file(role, Some(candidate))
        }
        (None, Some(text)) => session.submit_text(role, &text),
        (None, None) => session.pick_file(role, None),
    };

    event.into_result()
}

async fn analyze(
    resume: ResumeInput,
    job: JobInput,
    output: Option<String>,
    detailed: bool,
    save: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let output_format = match output {
        Some(format) => parse_output_format(&format).map_err(IntakeError::InvalidInput)?,
        None => config.output.format,
    };

    // JSON reports are meant for other programs; keep toasts in the log stream.
    let notifier: Arc<dyn Notifier> = match output_format {
        OutputFormat::Json => Arc::new(LogNotifier),
        OutputFormat::Console => Arc::new(ConsoleNotifier::new(config.output.color_output)),
    };
    let mut session = IntakeSession::new(Normalizer::new(config.intake.clone()), notifier);

    intake(&mut session, Role::Resume, resume.resume, resume.resume_text, resume.resume_mime)?;
    intake(&mut session, Role::JobDescription, job.job, job.job_text, job.job_mime)?;

    info!("Starting analysis");
    let client = AnalysisClient::new(
        MockAnalysisService::new(config.mock_delay()),
        &config.analysis,
    );

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.analyze_selection(&session).await;
    spinner.finish_and_clear();
    let result = result?;

    let report = AnalysisReport::from_selection(result, session.selection());
    let generator = ReportGenerator::with_options(config.output.color_output, detailed, true);
    let content = generator.generate_report(&report, output_format)?;
    println!("{}", content);

    if let Some(path) = save {
        // Saved console reports never carry color codes.
        let plain = ReportGenerator::with_options(false, detailed, true)
            .generate_report(&report, output_format)?;
        save_report_to_file(&plain, &path)?;
        info!("Report saved to {}", path.display());
    }

    Ok(())
}
