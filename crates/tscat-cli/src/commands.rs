//! Command implementations.
//!
//! Every command returns its output as a string so the binary decides
//! where it goes.

use crate::cli::{CheckArgs, FmtArgs, LookupArgs, StatsArgs};
use crate::error::{CliError, CliResult};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tscat_catalog::{
    parser, writer, DocumentStats, InstallOutcome, LocaleTag, ResourceManager, Translator,
    TsDocument,
};
use tscat_common::{format_percent, single_line, truncate_string};
use tscat_config::{Config, ConfigLoader};

/// Language of the source strings in Papagayo-NG's UI.
const SOURCE_LOCALE: &str = "en";

/// Width used when quoting source strings in reports.
const QUOTE_WIDTH: usize = 60;

/// Resolves one string the way the application would at startup.
pub fn lookup(config: &Config, args: &LookupArgs) -> CliResult<String> {
    let locale = match &args.locale {
        Some(tag) => LocaleTag::parse(tag)?,
        None => config.language_tag()?,
    };
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| config.i18n.translations_dir.clone());

    let translator = Translator::new(
        ResourceManager::new(&dir),
        LocaleTag::parse(SOURCE_LOCALE)?,
    );
    if translator.install(&locale) == InstallOutcome::Fallback {
        warn!("Showing source text for locale {}", locale);
    }

    let resolved = match &args.comment {
        Some(comment) => translator.translate_disambiguated(&args.context, &args.source, comment),
        None => translator.translate(&args.context, &args.source),
    };
    Ok(resolved)
}

#[derive(Debug, Serialize)]
struct FileStats {
    path: PathBuf,
    #[serde(flatten)]
    stats: DocumentStats,
}

/// Completion report for each file, as a table or JSON.
pub fn stats(args: &StatsArgs) -> CliResult<String> {
    let reports = args
        .files
        .iter()
        .map(|path| {
            let document = parser::parse_file(path)?;
            Ok(FileStats {
                path: path.clone(),
                stats: DocumentStats::from_document(&document),
            })
        })
        .collect::<CliResult<Vec<_>>>()?;

    if args.json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }

    let mut out = String::new();
    for report in &reports {
        let overall = &report.stats.overall;
        let _ = writeln!(
            out,
            "{} ({}): {}/{} finished ({}), {} unfinished, {} empty, {} vanished",
            report.path.display(),
            report.stats.language.as_deref().unwrap_or("no language"),
            overall.finished,
            overall.active(),
            format_percent(overall.completion_ratio()),
            overall.unfinished,
            overall.empty,
            overall.vanished + overall.obsolete,
        );
        for context in &report.stats.contexts {
            let _ = writeln!(
                out,
                "  {:<24} {:>4}/{:<4} {:>7}",
                context.name,
                context.stats.finished,
                context.stats.active(),
                format_percent(context.stats.completion_ratio()),
            );
        }
    }
    Ok(out)
}

/// Result of a round-trip check on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The document survived unchanged.
    Passed {
        /// Messages in the document.
        messages: usize,
    },
    /// The file could not be parsed.
    Unreadable(String),
    /// The rewritten document differs.
    Changed(String),
}

/// Outcome of `check` over several files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// One line per file.
    pub output: String,
    /// Number of failing files.
    pub failed: usize,
    /// Number of checked files.
    pub total: usize,
}

impl CheckReport {
    /// Turns failures into [`CliError::CheckFailed`].
    pub fn into_result(self) -> CliResult<String> {
        if self.failed > 0 {
            return Err(CliError::CheckFailed {
                failed: self.failed,
                total: self.total,
            });
        }
        Ok(self.output)
    }
}

/// Parses, writes and re-parses each file, comparing the models.
pub fn check(args: &CheckArgs) -> CheckReport {
    let mut output = String::new();
    let mut failed = 0;

    for path in &args.files {
        match check_file(path) {
            CheckOutcome::Passed { messages } => {
                let _ = writeln!(output, "ok      {} ({messages} messages)", path.display());
            }
            CheckOutcome::Unreadable(reason) | CheckOutcome::Changed(reason) => {
                failed += 1;
                let _ = writeln!(output, "FAILED  {}: {reason}", path.display());
            }
        }
    }

    CheckReport {
        output,
        failed,
        total: args.files.len(),
    }
}

/// Round-trip check for a single file.
pub fn check_file(path: &Path) -> CheckOutcome {
    let original = match parser::parse_file(path) {
        Ok(document) => document,
        Err(e) => return CheckOutcome::Unreadable(e.to_string()),
    };

    let rewritten = writer::write_string(&original);
    match parser::parse_str(&rewritten) {
        Ok(reparsed) if reparsed == original => CheckOutcome::Passed {
            messages: original.message_count(),
        },
        Ok(reparsed) => CheckOutcome::Changed(describe_difference(&original, &reparsed)),
        Err(e) => CheckOutcome::Changed(format!("rewritten document does not parse: {e}")),
    }
}

fn describe_difference(original: &TsDocument, reparsed: &TsDocument) -> String {
    if original.contexts.len() != reparsed.contexts.len() {
        return format!(
            "context count changed from {} to {}",
            original.contexts.len(),
            reparsed.contexts.len()
        );
    }

    let first_changed = original
        .messages()
        .zip(reparsed.messages())
        .find(|(before, after)| before != after);

    match first_changed {
        Some(((context, message), _)) => format!(
            "message changed in context '{}': \"{}\"",
            context,
            truncate_string(&single_line(&message.source), QUOTE_WIDTH)
        ),
        None => "document header changed".to_string(),
    }
}

/// Canonical serialization of a catalog.
///
/// Returns the text when no output path is given.
pub fn fmt(args: &FmtArgs) -> CliResult<Option<String>> {
    let document = parser::parse_file(&args.file)?;

    match &args.output {
        Some(output) => {
            writer::write_file(&document, output)?;
            Ok(None)
        }
        None => Ok(Some(writer::write_string(&document))),
    }
}

/// Writes a default configuration file.
pub fn config_init(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }

    ConfigLoader::new(path).save(&Config::default())?;
    info!("Wrote default configuration to {:?}", path);
    Ok(())
}

/// The effective configuration as TOML.
pub fn config_show(config: &Config) -> CliResult<String> {
    debug!("Rendering effective configuration");
    Ok(config.to_toml()?)
}
