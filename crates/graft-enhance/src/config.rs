use graft_core::Candidate;

use crate::{dates, toggler};

/// Long-form date rendering: full weekday, month name, numeric day and year,
/// 12-hour clock with seconds.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y, %-I:%M:%S %p";

/// Everything one enhancement run needs to know. Defaults reproduce the
/// built-in candidate chains and formatting; callers override pieces from a
/// config file.
#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    pub platform_candidates: Vec<Candidate>,
    pub title_candidates: Vec<Candidate>,
    pub comment_candidates: Vec<Candidate>,
    pub date_format: String,
    pub dates_enabled: bool,
    pub toggler_enabled: bool,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            platform_candidates: graft_detect::wordpress_candidates(),
            title_candidates: dates::title_candidates(),
            comment_candidates: toggler::comment_candidates(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            dates_enabled: true,
            toggler_enabled: true,
        }
    }
}
