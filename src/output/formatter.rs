//! Output formatters for analysis reports

use crate::analysis::{Priority, ScoreBand, Suggestion};
use crate::config::OutputFormat;
use crate::error::{IntakeError, Result};
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured hand-off
pub struct JsonFormatter {
    pretty: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match ScoreBand::from_score(score) {
            ScoreBand::Excellent => ("EXCELLENT", Color::Green),
            ScoreBand::Good => ("GOOD", Color::Yellow),
            ScoreBand::NeedsWork => ("NEEDS WORK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_bar(&self, value: u32, max: u32) -> String {
        const WIDTH: u64 = 10;
        let filled = if max == 0 {
            0
        } else {
            (u64::from(value) * WIDTH / u64::from(max)).min(WIDTH)
        };
        format!(
            "{}{}",
            "■".repeat(filled as usize),
            "□".repeat((WIDTH - filled) as usize)
        )
    }

    fn priority_color(priority: Priority) -> Color {
        match priority {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Blue,
        }
    }

    fn format_suggestion(&self, index: usize, suggestion: &Suggestion) -> String {
        let mut out = format!(
            "  {}. {} ({}) {}\n",
            index + 1,
            suggestion.title,
            suggestion.kind,
            self.colorize(&suggestion.impact, Color::Green)
        );
        if self.detailed {
            out.push_str(&format!("     {}\n", suggestion.description));
        }
        if let Some(keywords) = &suggestion.keywords {
            out.push_str(&format!("     Keywords: {}\n", keywords.join(", ")));
        }
        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS"));
        output.push_str(&format!(
            "Resume: {} | Job description: {}\n",
            report.metadata.resume, report.metadata.job_description
        ));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("ATS Compatibility Score"));
        output.push_str(&format!(
            "  {}/100 {}\n",
            result.ats_score,
            self.format_score_badge(result.ats_score)
        ));
        for entry in &result.breakdown {
            output.push_str(&format!(
                "  {:<22} {} {}/{}\n",
                entry.label,
                self.format_bar(entry.value, entry.max),
                entry.value,
                entry.max
            ));
        }

        output.push_str(&self.format_header("Job Match"));
        output.push_str(&format!("  {}% Match\n", result.match_percentage));
        output.push_str(&format!("  {}\n", result.match_verdict()));

        output.push_str(&self.format_header(&format!(
            "Suggestions ({})",
            result.suggestions.len()
        )));
        for (priority, group) in result.grouped_suggestions() {
            let heading = format!("{} Priority ({})", priority, group.len());
            output.push_str(&format!(
                "{}\n",
                self.colorize(&heading, Self::priority_color(priority))
            ));
            for (i, suggestion) in group.iter().enumerate() {
                output.push_str(&self.format_suggestion(i, suggestion));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 2] {
        [&self.console_formatter, &self.json_formatter]
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        let formatter = self
            .formatters()
            .into_iter()
            .find(|f| f.supports_format() == format)
            .ok_or_else(|| {
                IntakeError::OutputFormatting(format!("No formatter for {:?}", format))
            })?;
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Parse an output format name as given on the command line
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}
