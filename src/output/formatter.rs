//! Output formatters: console, JSON, and CSV export

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::RankingReport;
use colored::Colorize;

const SCORE_BAR_WIDTH: usize = 20;

/// Trait for rendering a ranking report into a target format.
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a per-rank score bar.
pub struct ConsoleFormatter {
    use_colors: bool,
    precision: usize,
}

/// JSON formatter for structured consumption of the full report.
pub struct JsonFormatter {
    pretty: bool,
}

/// CSV export of the ranking: "Resume Name,Score", one row per
/// ranked document, best match first.
pub struct CsvFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, precision: usize) -> Self {
        Self {
            use_colors,
            precision,
        }
    }

    fn score_bar(score: f64) -> String {
        let filled = (score.clamp(0.0, 1.0) * SCORE_BAR_WIDTH as f64).round() as usize;
        format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(SCORE_BAR_WIDTH - filled)
        )
    }

    fn paint(&self, text: String, strong: bool) -> String {
        if !self.use_colors {
            return text;
        }
        if strong {
            text.green().bold().to_string()
        } else {
            text.cyan().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&self.paint("Ranked Resumes".to_string(), true));
        out.push('\n');
        out.push_str(&format!(
            "Job description: {} ({} documents, {} ms)\n\n",
            report.job_description, report.document_count, report.processing_time_ms
        ));

        if report.ranking.is_empty() {
            out.push_str("No documents to rank.\n");
            return Ok(out);
        }

        for (position, entry) in report.ranking.iter().enumerate() {
            let line = format!(
                "Rank {}: {} (Score: {:.prec$})",
                position + 1,
                entry.name,
                entry.score,
                prec = self.precision
            );
            out.push_str(&self.paint(line, position == 0));
            out.push('\n');
            out.push_str(&format!("  {}\n", Self::score_bar(entry.score)));
        }

        Ok(out)
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
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::from("Resume Name,Score\n");
        for entry in &report.ranking {
            out.push_str(&format!(
                "{},{}\n",
                escape_csv_field(&entry.name),
                entry.score
            ));
        }
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

/// Quote a field when it contains a separator, quote, or line break;
/// embedded quotes are doubled.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Routes a report to the formatter for the requested output format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    csv_formatter: CsvFormatter,
}

impl ReportGenerator {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(output.color_output, output.score_precision),
            json_formatter: JsonFormatter::new(true),
            csv_formatter: CsvFormatter,
        }
    }

    pub fn generate(&self, report: &RankingReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Csv => self.csv_formatter.format_report(report),
        }
    }
}
