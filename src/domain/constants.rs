//! Stable cadence and naming constants shared across the pipeline.

use chrono::Weekday;

/// Weekday the meetup recurs on.
pub const MEETUP_WEEKDAY: Weekday = Weekday::Wed;
/// Candidate weeks probed by the locator before giving up.
pub const MAX_WEEKS_BACK: u32 = 10;
/// Site tag in page file names (`MMDD-<tag>.<ext>`).
pub const PAGE_TAG: &str = "nycu";
/// Source page file extension.
pub const PAGE_EXT: &str = "rst";
/// Leading directory of the published page URL.
pub const URL_DIR: &str = "meetup";
/// Extension appended to the URL for the saved page path.
pub const SAVE_EXT: &str = ".html";

/// Derived field keys. These overwrite extracted fields of the same name.
pub const EVENT_YEAR: &str = "EVENT_YEAR";
pub const EVENT_MONTH: &str = "EVENT_MONTH";
pub const EVENT_DATE: &str = "EVENT_DATE";
pub const FILE_CREATE_DATE: &str = "FILE_CREATE_DATE";
pub const FILE_URL: &str = "FILE_URL";
pub const FILE_SAVE_AS: &str = "FILE_SAVE_AS";
