/// Fixed-width text rendering of a filtered report
///
/// The export format is a starred banner with the application title, a
/// dot-padded four-column table (date, intensity, migraine, medicine),
/// comment lines wrapped to the report width, and a starred footer
/// carrying the generation timestamp. This module is pure text
/// production; writing the file is the caller's job.

use chrono::NaiveDateTime;

use crate::domain::HeadacheRecord;

/// Total width of the report, in characters
pub const REPORT_WIDTH: usize = 120;

/// Width of each of the four table columns
pub const COLUMN_WIDTH: usize = REPORT_WIDTH / 4;

/// Render the records into the export text
pub fn render(records: &[HeadacheRecord], generated_at: NaiveDateTime) -> String {
    let banner = "*".repeat(REPORT_WIDTH);
    let title = format!(" HEADACHE DIARY v{} ", env!("CARGO_PKG_VERSION"));

    let mut out = String::new();
    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!("{:*^width$}", title, width = REPORT_WIDTH));
    out.push('\n');
    out.push_str(&banner);
    out.push_str("\n\n");

    out.push_str(&format!(
        "{:<width$}{:>width$}{:>width$}{:>width$}\n",
        "Date:",
        "Intensity:",
        "Migraine:",
        "Medicine:",
        width = COLUMN_WIDTH
    ));

    for record in records {
        out.push_str(&format!(
            "{:.<width$}{:.>width$}{:.>width$}{:.>width$}\n",
            record.date_key(),
            record.intensity.value(),
            yes_no(record.migraine),
            yes_no(record.medicine),
            width = COLUMN_WIDTH
        ));
        if let Some(comment) = &record.comment {
            for line in wrap_words(comment, REPORT_WIDTH) {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    let footer = format!(
        " Generated in {} ***",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    out.push('\n');
    out.push_str(&format!("{:*>width$}\n", footer, width = REPORT_WIDTH));

    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Greedily pack words into lines no longer than `width`
///
/// A break is inserted after the last word that keeps the line within the
/// width; a single word longer than the width is kept whole on its own
/// line rather than split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
