//! Text report of a finished search

use std::fmt::Write as _;

use console::Style;

use crate::manifest::Match;
use crate::scanner::AggregateResults;

/// Printed instead of any bucket section when nothing matched
pub const NO_MATCHES: &str = "No matches found.";

/// Rendered output and whether anything matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub any_match: bool,
}

/// Styles applied to the report; all of them are no-ops when styling is off
struct Palette {
    bucket: Style,
    version: Style,
    executable: Style,
}

impl Palette {
    fn new(styled: bool) -> Self {
        Self {
            bucket: Style::new().bold().yellow().force_styling(styled),
            version: Style::new().dim().force_styling(styled),
            executable: Style::new().green().force_styling(styled),
        }
    }
}

/// Render `results` with buckets in lexicographic order, skipping buckets without matches.
///
/// With `styled` set, bucket names, versions and executables carry ANSI styling;
/// the text is otherwise identical.
pub fn render(results: &AggregateResults, styled: bool) -> Report {
    let palette = Palette::new(styled);
    let mut text = String::with_capacity(results.bucket_count() * 12 + results.total_matches() * 24);
    let mut any_match = false;

    for (bucket, matches) in results.sorted() {
        if matches.is_empty() {
            continue;
        }
        any_match = true;

        let _ = writeln!(text, "'{}' bucket:", palette.bucket.apply_to(bucket));
        for found in matches {
            write_match(&mut text, found, &palette);
        }
        text.push('\n');
    }

    if !any_match {
        text.push_str(NO_MATCHES);
    }

    Report { text, any_match }
}

fn write_match(text: &mut String, found: &Match, palette: &Palette) {
    let _ = write!(
        text,
        "    {} {}",
        found.name(),
        palette.version.apply_to(format!("({})", found.version()))
    );
    if let Some(exe) = found.executable() {
        let _ = write!(
            text,
            " --> includes '{}'",
            palette.executable.apply_to(exe)
        );
    }
    text.push('\n');
}
