use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset};
use graft_core::{ArticleDates, Candidate, Insertion, PagePatch, Placement};
use graft_dom::{resolve, Page};
use tracing::{info, warn};

use crate::config::EnhanceConfig;

pub const PUBLISHED_META: &str = "meta[property=\"article:published_time\"]";
pub const MODIFIED_META: &str = "meta[property=\"article:modified_time\"]";

/// Anchor chain for the date banner: the banner lands right after the first
/// of these that exists.
pub fn title_candidates() -> Vec<Candidate> {
    vec![
        Candidate::bare("header.entry-header"),
        Candidate::bare("h1.entry-title"),
        Candidate::bare("h1.uk-article-title"),
    ]
}

/// Lift publish/modify timestamps out of the article meta tags. A tag that
/// is absent or carries an unparsable value contributes nothing.
pub fn collect_dates(page: &Page) -> ArticleDates {
    ArticleDates {
        published: meta_date(page, PUBLISHED_META),
        modified: meta_date(page, MODIFIED_META),
    }
}

fn meta_date(page: &Page, selector: &str) -> Option<DateTime<FixedOffset>> {
    let element = page.first_match(selector)?;
    let content = element.value().attr("content")?;
    match DateTime::parse_from_rfc3339(content) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(selector = %selector, value = %content, error = %e, "unparsable date meta skipped");
            None
        }
    }
}

/// One formatted line per populated label, in fixed order, each prefixed
/// with the capitalized label.
pub fn date_lines(dates: &ArticleDates, format: &str) -> Vec<String> {
    dates
        .entries()
        .iter()
        .map(|(label, date)| format!("<b>{}:</b> {}", capitalize(label), format_date(date, format)))
        .collect()
}

fn format_date(date: &DateTime<FixedOffset>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        warn!(format = %format, "invalid date format string, falling back to rfc3339");
        return date.to_rfc3339();
    }
    out
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Plan the date banner: skip (log-only) when the page carries no date meta
/// or no title anchor, otherwise append one insertion after the anchor.
pub fn plan_date_banner(page: &Page, config: &EnhanceConfig, patch: &mut PagePatch) -> bool {
    let dates = collect_dates(page);
    if dates.is_empty() {
        info!("page has no article date meta tags");
        return false;
    }

    let (anchor, index) = match resolve(page, &config.title_candidates).found() {
        Some(found) => found,
        None => {
            info!("page has no title element to anchor the date banner");
            return false;
        }
    };

    let mut markup = String::from("<div id=\"graft-dates-container\">");
    for line in date_lines(&dates, &config.date_format) {
        markup.push_str(&line);
        markup.push_str("<br>");
    }
    markup.push_str("</div>");

    patch.insertions.push(Insertion {
        anchor: anchor.html(),
        placement: Placement::AfterEnd,
        markup,
    });
    info!(candidate = index, "date banner planned");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATE_FORMAT;

    fn page_with_head(head: &str) -> Page {
        Page::parse(&format!(
            "<html><head>{}</head><body><h1 class=\"entry-title\">Post</h1></body></html>",
            head
        ))
    }

    #[test]
    fn collects_both_dates_when_present() {
        let page = page_with_head(
            "<meta property=\"article:published_time\" content=\"2024-01-01T00:00:00Z\">\
             <meta property=\"article:modified_time\" content=\"2024-02-03T12:30:00+07:00\">",
        );
        let dates = collect_dates(&page);
        assert!(dates.published.is_some());
        assert!(dates.modified.is_some());
    }

    #[test]
    fn published_only_yields_a_single_published_line() {
        let page = page_with_head(
            "<meta property=\"article:published_time\" content=\"2024-01-01T00:00:00Z\">",
        );
        let dates = collect_dates(&page);
        let lines = date_lines(&dates, DEFAULT_DATE_FORMAT);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("<b>Published:</b>"));
        assert!(!lines.iter().any(|line| line.contains("Modified")));
    }

    #[test]
    fn long_form_format_renders_weekday_and_clock() {
        let page = page_with_head(
            "<meta property=\"article:published_time\" content=\"2024-01-01T00:00:00Z\">",
        );
        let dates = collect_dates(&page);
        let lines = date_lines(&dates, DEFAULT_DATE_FORMAT);
        assert_eq!(lines[0], "<b>Published:</b> Monday, January 1, 2024, 12:00:00 AM");
    }

    #[test]
    fn unparsable_date_meta_is_skipped() {
        let page = page_with_head(
            "<meta property=\"article:published_time\" content=\"yesterday-ish\">",
        );
        assert!(collect_dates(&page).is_empty());
    }

    #[test]
    fn banner_lands_after_the_title_anchor() {
        let page = page_with_head(
            "<meta property=\"article:published_time\" content=\"2024-01-01T00:00:00Z\">",
        );
        let mut patch = PagePatch::default();
        assert!(plan_date_banner(&page, &EnhanceConfig::default(), &mut patch));
        assert_eq!(patch.insertions.len(), 1);
        let insertion = &patch.insertions[0];
        assert_eq!(insertion.placement, Placement::AfterEnd);
        assert!(insertion.anchor.contains("entry-title"));
        assert!(insertion.markup.starts_with("<div id=\"graft-dates-container\">"));
    }

    #[test]
    fn missing_dates_or_anchor_plan_nothing() {
        let mut patch = PagePatch::default();
        let no_dates = page_with_head("");
        assert!(!plan_date_banner(&no_dates, &EnhanceConfig::default(), &mut patch));

        let no_anchor = Page::parse(
            "<html><head><meta property=\"article:published_time\" content=\"2024-01-01T00:00:00Z\"></head>\
             <body><p>no title here</p></body></html>",
        );
        assert!(!plan_date_banner(&no_anchor, &EnhanceConfig::default(), &mut patch));
        assert!(patch.insertions.is_empty());
    }
}
