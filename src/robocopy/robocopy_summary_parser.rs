use crate::robocopy::robocopy_counts::RobocopyCounts;
use crate::robocopy::robocopy_summary::RobocopySummary;
use crate::robocopy::robocopy_summary_error::RobocopySummaryError;
use crate::robocopy::robocopy_times::RobocopyTimes;
use itertools::Itertools;
use std::path::Path;

/// Robocopy emits a fixed-size banner before the per-file records start;
/// `Source`/`Dest` always land within the first dozen lines.
const HEADER_WINDOW: usize = 12;

/// The closing statistics block (column header row, Dirs/Files/Bytes/Times
/// rows, Ended timestamp) always fits in the last nine lines.
const FOOTER_WINDOW: usize = 9;

/// Parse the summary out of a robocopy log file on disk.
///
/// Only the header and footer windows are examined; the per-file body of the
/// log is read but never interpreted.
///
/// # Errors
///
/// Returns [`RobocopySummaryError::InvalidPath`] if `path` is not an existing
/// regular file, or [`RobocopySummaryError::Io`] if reading it fails.
pub fn parse_summary_file(path: &Path) -> Result<RobocopySummary, RobocopySummaryError> {
    if !path.is_file() {
        return Err(RobocopySummaryError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| RobocopySummaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_summary_text(&text))
}

/// Parse the summary out of already-loaded robocopy log text.
///
/// Total over its input: anything that does not look like a robocopy log
/// yields a default summary rather than an error.
#[must_use]
pub fn parse_summary_text(text: &str) -> RobocopySummary {
    let lines: Vec<&str> = text.lines().collect();
    let header = &lines[..lines.len().min(HEADER_WINDOW)];
    let footer = &lines[lines.len().saturating_sub(FOOTER_WINDOW)..];

    let mut summary = RobocopySummary::default();

    // First matching line wins for every field.
    for line in header {
        if summary.source.is_empty()
            && let Some(value) = header_value(line, "Source")
        {
            summary.source = value.to_string();
        }
        if summary.destination.is_empty()
            && let Some(value) = header_value(line, "Dest")
        {
            summary.destination = value.to_string();
        }
    }

    for line in footer {
        if summary.directories.is_none()
            && let Some(rest) = footer_section(line, "Dirs :")
        {
            summary.directories = parse_counts(rest);
        }
        if summary.files.is_none()
            && let Some(rest) = footer_section(line, "Files :")
        {
            summary.files = parse_counts(rest);
        }
        if summary.times.is_none()
            && let Some(rest) = footer_section(line, "Times :")
        {
            summary.times = parse_times(rest);
        }
    }

    summary
}

/// Extract the value of a header field like `   Source : J:\`.
///
/// Two delimiter variants exist in the wild: normal logs use `Source :` while
/// error logs use `Source -`. Both are tried, in that order.
fn header_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let idx = line.find(label)?;
    let rest = line[idx + label.len()..].trim_start();
    let value = rest
        .strip_prefix(':')
        .or_else(|| rest.strip_prefix('-'))?;
    Some(value.trim())
}

/// Return the remainder of a footer statistics line after its label.
///
/// Splits on the first colon only; the `Times :` values contain colons of
/// their own.
fn footer_section<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    if !line.contains(label) {
        return None;
    }
    let (_, rest) = line.split_once(':')?;
    Some(rest.trim())
}

/// Tokenize a `Dirs :`/`Files :` remainder into exactly six counters.
///
/// A short, long, or non-numeric row is treated as malformed and dropped
/// rather than partially populated.
fn parse_counts(rest: &str) -> Option<RobocopyCounts> {
    let (total, copied, skipped, mismatch, failed, extras) =
        rest.split_whitespace().collect_tuple()?;
    Some(RobocopyCounts {
        total: total.parse().ok()?,
        copied: copied.parse().ok()?,
        skipped: skipped.parse().ok()?,
        mismatch: mismatch.parse().ok()?,
        failed: failed.parse().ok()?,
        extras: extras.parse().ok()?,
    })
}

/// Tokenize a `Times :` remainder into exactly four duration strings.
///
/// Robocopy leaves the Skipped/Mismatch columns blank on this row, so four
/// tokens is the well-formed shape.
fn parse_times(rest: &str) -> Option<RobocopyTimes> {
    let (total, copied, failed, extras) = rest.split_whitespace().collect_tuple()?;
    Some(RobocopyTimes {
        total: total.to_string(),
        copied: copied.to_string(),
        failed: failed.to_string(),
        extras: extras.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn synthetic_log(header_delimiter: char) -> String {
        let d = header_delimiter;
        format!(
            "-------------------------------------------------------------------------------\n\
             \x20  ROBOCOPY     ::     Robust File Copy for Windows\n\
             -------------------------------------------------------------------------------\n\
             \n\
             \x20 Started : August 27, 2025 10:19:37 PM\n\
             \x20  Source {d} \\\\server\\share1\\\n\
             \x20    Dest {d} \\\\server\\share2\\\n\
             \n\
             \x20   Files : *.*\n\
             \n\
             \x20 Options : *.* /TEE /S /E /DCOPY:DA /COPY:DAT /R:1000000 /W:5\n\
             \n\
             ------------------------------------------------------------------------------\n\
             \n\
             \x20              Total    Copied   Skipped  Mismatch    FAILED    Extras\n\
             \x20   Dirs :         2         0         2         0         0         0\n\
             \x20  Files :       203         0       203         0         0         0\n\
             \x20  Bytes :    10.5 m         0    10.5 m         0         0         0\n\
             \x20  Times :   0:00:00   0:00:00                       0:00:00   0:00:00\n\
             \n\
             \x20  Ended : August 27, 2025 10:20:01 PM\n"
        )
    }

    #[test]
    fn parses_header_and_footer_from_synthetic_log() {
        let summary = parse_summary_text(&synthetic_log(':'));
        assert_eq!(summary.source, r"\\server\share1\");
        assert_eq!(summary.destination, r"\\server\share2\");
        let dirs = summary.directories.expect("Dirs row should parse");
        assert_eq!(dirs.total, 2);
        assert_eq!(dirs.copied, 0);
        assert_eq!(dirs.skipped, 2);
        let files = summary.files.expect("Files row should parse");
        assert_eq!(files.total, 203);
        assert_eq!(files.skipped, 203);
        let times = summary.times.expect("Times row should parse");
        assert_eq!(times.total, "0:00:00");
        assert_eq!(times.copied, "0:00:00");
        assert_eq!(times.failed, "0:00:00");
        assert_eq!(times.extras, "0:00:00");
    }

    #[test]
    fn parses_error_log_header_variant() {
        // Error logs write `Source - ...` instead of `Source : ...`
        let summary = parse_summary_text(&synthetic_log('-'));
        assert_eq!(summary.source, r"\\server\share1\");
        assert_eq!(summary.destination, r"\\server\share2\");
    }

    #[test]
    fn missing_dirs_row_degrades_without_error() {
        let log = synthetic_log(':')
            .lines()
            .filter(|line| !line.contains("Dirs :"))
            .join("\n");
        let summary = parse_summary_text(&log);
        assert_eq!(summary.directories, None);
        assert_eq!(summary.files.expect("Files row should parse").total, 203);
        assert_eq!(summary.times.expect("Times row should parse").total, "0:00:00");
    }

    #[test]
    fn unmatched_header_leaves_paths_empty() {
        let summary = parse_summary_text("not a robocopy log\nat all\n");
        assert_eq!(summary.source, "");
        assert_eq!(summary.destination, "");
        assert_eq!(summary, RobocopySummary::default());
    }

    #[test]
    fn first_matching_header_line_wins() {
        let log = "   Source : C:\\first\\\n   Source : C:\\second\\\n";
        let summary = parse_summary_text(log);
        assert_eq!(summary.source, r"C:\first\");
    }

    #[test]
    fn short_counter_row_is_dropped_as_malformed() {
        let summary = parse_summary_text("    Dirs :         2         0         2\n");
        assert_eq!(summary.directories, None);
    }

    #[test]
    fn non_numeric_counter_row_is_dropped_as_malformed() {
        let summary =
            parse_summary_text("   Bytes :    10.5 m         0    10.5 m         0         0         0\n    Dirs :         2         0         x         0         0         0\n");
        assert_eq!(summary.directories, None);
    }

    #[test]
    fn labels_outside_the_windows_are_ignored() {
        // A Source line buried past the header window and a Dirs row above the
        // footer window must both be skipped.
        let mut log = String::from("preamble\n".repeat(HEADER_WINDOW));
        log.push_str("   Source : C:\\late\\\n");
        log.push_str("    Dirs :         9         9         9         9         9         9\n");
        log.push_str(&"padding\n".repeat(FOOTER_WINDOW));
        let summary = parse_summary_text(&log);
        assert_eq!(summary.source, "");
        assert_eq!(summary.directories, None);
    }

    #[test]
    fn parses_captured_sample_log() {
        let summary = parse_summary_text(include_str!("sample.txt"));
        assert_eq!(summary.source, r"J:\");
        assert_eq!(summary.destination, r"K:\");
        let dirs = summary.directories.expect("Dirs row should parse");
        assert_eq!(dirs.total, 1193);
        assert_eq!(dirs.copied, 1192);
        assert_eq!(dirs.failed, 2);
        let files = summary.files.expect("Files row should parse");
        assert_eq!(files.total, 10176);
        assert_eq!(files.copied, 10176);
        let times = summary.times.expect("Times row should parse");
        assert_eq!(times.total, "1:42:17");
        assert_eq!(times.extras, "0:00:09");
    }

    #[test]
    fn parse_summary_file_reads_from_disk_idempotently() -> eyre::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(synthetic_log(':').as_bytes())?;
        let first = parse_summary_file(file.path())?;
        let second = parse_summary_file(file.path())?;
        assert_eq!(first, second);
        assert_eq!(first.source, r"\\server\share1\");
        Ok(())
    }

    #[test]
    fn nonexistent_path_is_invalid_path() {
        let err = parse_summary_file(Path::new("does/not/exist.log")).unwrap_err();
        assert!(matches!(
            err,
            RobocopySummaryError::InvalidPath { .. }
        ));
    }

    #[test]
    fn directory_path_is_invalid_path() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let err = parse_summary_file(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            RobocopySummaryError::InvalidPath { .. }
        ));
        Ok(())
    }
}
