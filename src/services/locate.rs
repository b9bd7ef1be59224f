use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, info};

use crate::domain::constants::{MAX_WEEKS_BACK, MEETUP_WEEKDAY, PAGE_EXT, PAGE_TAG};
use crate::error::GenError;

/// Expected file name for the meetup page of `date`.
pub fn page_name(date: NaiveDate) -> String {
    format!("{}-{}.{}", date.format("%m%d"), PAGE_TAG, PAGE_EXT)
}

/// Most recent cadence weekday on or before `today`.
pub fn previous_occurrence(today: NaiveDate) -> NaiveDate {
    let back = (today.weekday().num_days_from_monday() + 7
        - MEETUP_WEEKDAY.num_days_from_monday())
        % 7;
    today - Days::new(u64::from(back))
}

/// Resolve the previous meetup page under `pages_dir/<year>/`.
///
/// Occurrences may be paused, so the search walks back week-by-week from
/// the most recent cadence day, probing up to [`MAX_WEEKS_BACK`] candidate
/// dates. Year directories are resolved per candidate (a January run can
/// walk back into December) and listed at most once.
pub fn locate_source(pages_dir: &Path, today: NaiveDate) -> Result<PathBuf, GenError> {
    let mut candidate = previous_occurrence(today);
    let anchor_year = candidate.year();
    let mut listings: HashMap<i32, Vec<String>> = HashMap::new();

    for _ in 0..MAX_WEEKS_BACK {
        let year = candidate.year();
        let year_dir = pages_dir.join(year.to_string());
        if !listings.contains_key(&year) {
            // A missing directory for a walked-back year means no pages
            // that year; for the anchor year it means the tree is broken.
            listings.insert(year, list_pages(&year_dir, year == anchor_year)?);
        }
        let expected = page_name(candidate);
        let matches = listings[&year].iter().filter(|n| **n == expected).count();
        match matches {
            0 => {
                debug!(page = %expected, "no page for candidate week");
                candidate = candidate - Days::new(7);
            }
            1 => {
                let path = year_dir.join(&expected);
                info!(path = %path.display(), "found previous meetup page");
                return Ok(path);
            }
            matches => {
                return Err(GenError::AmbiguousSource {
                    name: expected,
                    matches,
                })
            }
        }
    }

    Err(GenError::SourceNotFound {
        dir: pages_dir.to_path_buf(),
        attempts: MAX_WEEKS_BACK,
    })
}

fn list_pages(year_dir: &Path, required: bool) -> Result<Vec<String>, GenError> {
    let unreadable = |source: io::Error| GenError::DirectoryUnreadable {
        dir: year_dir.to_path_buf(),
        source,
    };
    let entries = match fs::read_dir(year_dir) {
        Ok(entries) => entries,
        Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %year_dir.display(), "no pages directory for walked-back year");
            return Ok(Vec::new());
        }
        Err(err) => return Err(unreadable(err)),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(unreadable)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
