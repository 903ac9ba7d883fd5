use graft_core::{Accept, Candidate};
use regex::Regex;
use scraper::ElementRef;
use tracing::{debug, warn};

use crate::page::Page;

/// Outcome of resolving an ordered candidate list against a page.
#[derive(Debug)]
pub enum Resolution<'a> {
    Found {
        element: ElementRef<'a>,
        index: usize,
    },
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn found(&self) -> Option<(ElementRef<'a>, usize)> {
        match self {
            Resolution::Found { element, index } => Some((*element, *index)),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Walk `candidates` in declared order and return the first whose selector
/// matches an element that also passes its acceptance check (if any).
///
/// A structural match that fails its check does not stop the scan; later
/// candidates still get their turn. Exhaustion yields `NotFound` rather than
/// an error.
pub fn resolve<'a>(page: &'a Page, candidates: &[Candidate]) -> Resolution<'a> {
    for (index, candidate) in candidates.iter().enumerate() {
        let element = match page.first_match(&candidate.selector) {
            Some(element) => element,
            None => continue,
        };
        if let Some(ref accept) = candidate.accept {
            if !accepted(accept, &element) {
                debug!(selector = %candidate.selector, "matched element rejected by acceptance check");
                continue;
            }
        }
        return Resolution::Found { element, index };
    }
    Resolution::NotFound
}

/// Evaluate an acceptance check against a matched element. Any malformed
/// check rejects instead of failing the resolution.
pub fn accepted(accept: &Accept, element: &ElementRef<'_>) -> bool {
    match accept {
        Accept::AttrPrefix { attr, prefix } => element
            .value()
            .attr(attr)
            .map(|value| value.starts_with(prefix.as_str()))
            .unwrap_or(false),
        Accept::AttrPattern { attr, pattern } => {
            let re = match Regex::new(pattern) {
                Ok(re) => re,
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "invalid acceptance pattern rejects");
                    return false;
                }
            };
            element
                .value()
                .attr(attr)
                .map(|value| re.is_match(value))
                .unwrap_or(false)
        }
    }
}
