//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use arcgen_core::application::GenerationReport;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            parse_format(&config.output.format).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document on stdout. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Summarise a generation run.
    pub fn report(&self, report: &GenerationReport) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&ReportView::from(report));
        }

        let base = report.dir.as_path();
        for path in &report.written {
            self.success(&format!("Created {}", display_relative(path, base)))?;
        }
        for path in &report.touched {
            self.success(&format!("Touched {}", display_relative(path, base)))?;
        }
        for path in &report.declined {
            self.info(&format!("Kept {}", display_relative(path, base)))?;
        }
        for skipped in &report.failed {
            self.warning(&format!(
                "Skipped {}: {}",
                display_relative(&skipped.path, base),
                skipped.reason
            ))?;
        }

        if report.produced().next().is_some() {
            self.header(&format!("\u{26a1} {}", report.dir.display()))?;
        } else {
            self.info("Nothing was written")?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "auto" => Some(OutputFormat::Auto),
        "human" => Some(OutputFormat::Human),
        "plain" => Some(OutputFormat::Plain),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// JSON shape of a [`GenerationReport`].
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub touched: Vec<PathBuf>,
    pub declined: Vec<PathBuf>,
    pub failed: Vec<SkippedView>,
}

#[derive(Debug, Serialize)]
pub struct SkippedView {
    pub key: &'static str,
    pub path: PathBuf,
    pub reason: String,
}

impl From<&GenerationReport> for ReportView {
    fn from(report: &GenerationReport) -> Self {
        Self {
            dir: report.dir.clone(),
            written: report.written.clone(),
            touched: report.touched.clone(),
            declined: report.declined.clone(),
            failed: report
                .failed
                .iter()
                .map(|s| SkippedView {
                    key: s.key.as_str(),
                    path: s.path.clone(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use arcgen_core::application::SkippedEntry;
    use arcgen_core::domain::ManifestKey;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn sample_report() -> GenerationReport {
        let dir = PathBuf::from("/ws/src/MainMenu");
        GenerationReport {
            written: vec![dir.join("index.js")],
            touched: vec![dir.join("_reactium-style-atoms-main-menu.scss")],
            declined: vec![dir.join("reactium-hooks.js")],
            failed: vec![SkippedEntry {
                key: ManifestKey::Domain,
                path: dir.join("domain.js"),
                reason: "template missing".into(),
            }],
            dir,
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = make_manager(false, false, OutputFormat::Plain);
        assert!(!out.supports_color());
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn json_format_is_kept() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn parse_format_accepts_known_names() {
        assert_eq!(parse_format("JSON"), Some(OutputFormat::Json));
        assert_eq!(parse_format("human"), Some(OutputFormat::Human));
        assert_eq!(parse_format("fancy"), None);
    }

    #[test]
    fn report_renders_in_plain_and_json() {
        let report = sample_report();
        assert!(make_manager(false, true, OutputFormat::Plain).report(&report).is_ok());
        assert!(make_manager(false, true, OutputFormat::Json).report(&report).is_ok());
    }

    #[test]
    fn report_view_keeps_every_bucket() {
        let view = ReportView::from(&sample_report());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["written"].as_array().unwrap().len(), 1);
        assert_eq!(json["failed"][0]["key"], "domain");
        assert_eq!(json["failed"][0]["reason"], "template missing");
    }

    #[test]
    fn relative_display_strips_the_component_dir() {
        let shown = display_relative(Path::new("/ws/src/Menu/index.js"), Path::new("/ws/src/Menu"));
        assert_eq!(shown, "index.js");
    }
}
