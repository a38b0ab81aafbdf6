use std::io::Read;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use airdate_core::{
    ParseError, ParseReport, Show, parse_all, parse_report, sort_by_duration_descending,
};

use crate::config::{OutputFormat, Policy, Settings};
use crate::error::CliError;

/// Listing used by `airdate sample`. The comma-separated entry is not a
/// recognized shape, so a strict run rejects the batch.
pub(crate) const SAMPLE_RECORDS: &[&str] = &[
    "The Office (2005-2013)",
    "Breaking Bad (2008-2013)",
    "Friends (1994-2004)",
    "The Simpsons, 1989-2021",
    "Game of Thrones (2011)",
];

/// Parse records from files (or stdin) and render them.
///
/// Returns `Ok(false)` when the strict policy rejected the batch.
pub(crate) fn run_parse(files: &[PathBuf], settings: Settings) -> Result<bool, CliError> {
    let records = read_records(files)?;
    log::debug!("Read {} records", records.len());
    process(&records, settings)
}

/// Parse the built-in sample listing and render it.
pub(crate) fn run_sample(settings: Settings) -> Result<bool, CliError> {
    process(SAMPLE_RECORDS, settings)
}

fn process<S: AsRef<str>>(records: &[S], settings: Settings) -> Result<bool, CliError> {
    let evaluation = evaluate(records, settings);
    match settings.format {
        OutputFormat::Text => render_text(&evaluation),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_output(&evaluation))?);
        }
    }
    Ok(evaluation.accepted())
}

// ── Evaluation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Evaluation {
    policy: Policy,
    shows: Vec<Show>,
    rejected: Vec<ParseError>,
}

impl Evaluation {
    fn accepted(&self) -> bool {
        self.policy == Policy::Lenient || self.rejected.is_empty()
    }
}

fn evaluate<S: AsRef<str>>(records: &[S], settings: Settings) -> Evaluation {
    let (shows, rejected) = match settings.policy {
        Policy::Strict => match parse_all(records) {
            Ok(shows) => (shows, Vec::new()),
            Err(e) => (Vec::new(), vec![e]),
        },
        Policy::Lenient => {
            let ParseReport { shows, failures } = parse_report(records);
            (shows, failures)
        }
    };

    let shows = if settings.sort {
        sort_by_duration_descending(&shows)
    } else {
        shows
    };

    Evaluation {
        policy: settings.policy,
        shows,
        rejected,
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

fn read_records(files: &[PathBuf]) -> Result<Vec<String>, CliError> {
    let mut texts = Vec::new();
    if files.is_empty() {
        texts.push(read_stdin()?);
    }
    for path in files {
        if path.as_os_str() == "-" {
            texts.push(read_stdin()?);
        } else {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::input(path.display().to_string(), e))?;
            texts.push(text);
        }
    }
    Ok(texts.iter().flat_map(|t| records_from_text(t)).collect())
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// One record per line. Blank lines and `#` comments are skipped.
fn records_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

// ── Rendering ───────────────────────────────────────────────────────────────

fn years(show: &Show) -> String {
    if show.is_single_year() {
        show.start.to_string()
    } else {
        format!("{}-{}", show.start, show.end)
    }
}

fn render_text(evaluation: &Evaluation) {
    if !evaluation.accepted() {
        for e in &evaluation.rejected {
            log::error!("{}", e);
        }
        log::info!("Batch rejected. Use '--policy lenient' to skip malformed records.");
        return;
    }

    for e in &evaluation.rejected {
        log::warn!("Skipped: {}", e);
    }

    let width = evaluation
        .shows
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(0);

    for show in &evaluation.shows {
        let title = format!("{:<width$}", show.title);
        let span = format!("{:<9}", years(show));
        let duration = match show.duration() {
            1 => "1 year".to_string(),
            n => format!("{n} years"),
        };
        log::info!(
            "  {}  {}  {}",
            title.if_supports_color(Stdout, |t| t.bold()),
            span.if_supports_color(Stdout, |t| t.cyan()),
            duration.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    log::info!("");
    if evaluation.rejected.is_empty() {
        log::info!(
            "{} parsed",
            format!("{} shows", evaluation.shows.len()).if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "{} parsed, {} skipped",
            format!("{} shows", evaluation.shows.len()).if_supports_color(Stdout, |t| t.green()),
            evaluation
                .rejected
                .len()
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    policy: Policy,
    accepted: bool,
    shows: &'a [Show],
    rejected: Vec<JsonRejection<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRejection<'a> {
    record: &'a str,
    field: &'static str,
    message: String,
}

fn json_output(evaluation: &Evaluation) -> JsonOutput<'_> {
    JsonOutput {
        policy: evaluation.policy,
        accepted: evaluation.accepted(),
        shows: &evaluation.shows,
        rejected: evaluation
            .rejected
            .iter()
            .map(|e| JsonRejection {
                record: e.raw(),
                field: e.field().as_str(),
                message: e.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(policy: Policy, sort: bool) -> Settings {
        Settings {
            policy,
            sort,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn lines_skip_blanks_and_comments() {
        let text = "# watchlist\nFriends (1994-2004)\n\n   \n  Game of Thrones (2011)  \n";
        assert_eq!(
            records_from_text(text),
            vec!["Friends (1994-2004)", "Game of Thrones (2011)"]
        );
    }

    #[test]
    fn strict_sample_is_rejected() {
        let evaluation = evaluate(SAMPLE_RECORDS, settings(Policy::Strict, false));
        assert!(!evaluation.accepted());
        assert!(evaluation.shows.is_empty());
        assert_eq!(evaluation.rejected.len(), 1);
        assert_eq!(evaluation.rejected[0].raw(), "The Simpsons, 1989-2021");
    }

    #[test]
    fn lenient_sample_keeps_four_shows() {
        let evaluation = evaluate(SAMPLE_RECORDS, settings(Policy::Lenient, false));
        assert!(evaluation.accepted());
        assert_eq!(evaluation.shows.len(), 4);
        assert_eq!(evaluation.rejected.len(), 1);
    }

    #[test]
    fn lenient_sorted_sample() {
        let evaluation = evaluate(SAMPLE_RECORDS, settings(Policy::Lenient, true));
        let titles: Vec<&str> = evaluation.shows.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Friends", "The Office", "Breaking Bad", "Game of Thrones"]
        );
    }

    #[test]
    fn json_lists_rejections() {
        let evaluation = evaluate(SAMPLE_RECORDS, settings(Policy::Lenient, false));
        let value = serde_json::to_value(json_output(&evaluation)).unwrap();
        assert_eq!(value["policy"], "lenient");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["shows"].as_array().unwrap().len(), 4);
        assert_eq!(value["shows"][0]["title"], "The Office");
        assert_eq!(value["rejected"][0]["record"], "The Simpsons, 1989-2021");
        assert_eq!(value["rejected"][0]["field"], "title");
    }

    #[test]
    fn years_column() {
        assert_eq!(years(&Show::new("A", 2005, 2013)), "2005-2013");
        assert_eq!(years(&Show::new("B", 2011, 2011)), "2011");
    }
}
