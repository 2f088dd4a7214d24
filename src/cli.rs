//! CLI interface for resume intake

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-intake")]
#[command(about = "Validate a resume and job description and hand them to the analysis service")]
#[command(long_about = "Accepts PDF, DOCX or TXT files (or pasted text for either role), checks them the way the upload form does, and prints the compatibility score and improvement suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a single file would be accepted
    Check {
        /// File to check
        file: PathBuf,

        /// Declared MIME type, as a browser would report it
        #[arg(short, long)]
        mime: Option<String>,
    },

    /// Validate both inputs and run the analysis
    Analyze {
        #[command(flatten)]
        resume: ResumeInput,

        #[command(flatten)]
        job: JobInput,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Include suggestion descriptions
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct ResumeInput {
    /// Path to resume file (PDF, DOCX, TXT)
    #[arg(short, long, required_unless_present = "resume_text", conflicts_with = "resume_text")]
    pub resume: Option<PathBuf>,

    /// Resume pasted as text
    #[arg(long)]
    pub resume_text: Option<String>,

    /// Declared MIME type of the resume file
    #[arg(long, requires = "resume")]
    pub resume_mime: Option<String>,
}

#[derive(Args)]
pub struct JobInput {
    /// Path to job description file (PDF, DOCX, TXT)
    #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description pasted as text
    #[arg(long)]
    pub job_text: Option<String>,

    /// Declared MIME type of the job description file
    #[arg(long, requires = "job")]
    pub job_mime: Option<String>,
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
