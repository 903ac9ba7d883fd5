use graft_core::{AttrSet, Candidate, Insertion, PagePatch, Placement, ToggleState};
use graft_dom::{resolve, Page};
use regex::Regex;
use tracing::info;

use crate::config::EnhanceConfig;

/// Marker attribute carrying the expanded state on the comments container.
pub const MARKER_ATTR: &str = "data-expanded";

/// URL fragments that deep-link into the comment section.
pub const COMMENT_FRAGMENT_PATTERN: &str = r"^comment(s|-\d+)$";

/// Containers the toggler can attach to, most specific first.
pub fn comment_candidates() -> Vec<Candidate> {
    vec![
        Candidate::bare(".content-comments.container"),
        Candidate::bare(".comments-area"),
        Candidate::bare("#disqus_thread"),
        Candidate::bare("#fastcomments-widget"),
    ]
}

pub fn fragment_targets_comments(fragment: Option<&str>) -> bool {
    let fragment = match fragment {
        Some(fragment) => fragment,
        None => return false,
    };
    match Regex::new(COMMENT_FRAGMENT_PATTERN) {
        Ok(re) => re.is_match(fragment),
        Err(_) => false,
    }
}

/// Comments start expanded only when the page was opened through a comment
/// anchor; everything else lands collapsed.
pub fn initial_state(page: &Page) -> ToggleState {
    if fragment_targets_comments(page.url_fragment()) {
        ToggleState::Expanded
    } else {
        ToggleState::Collapsed
    }
}

/// The rule that actually hides a collapsed section, keyed to the selector
/// that matched the container.
pub fn collapse_rule(selector: &str) -> String {
    format!(
        "{}:not([{}=\"1\"]) {{ height: 0; overflow: hidden }}",
        selector, MARKER_ATTR
    )
}

/// Plan the comment toggler: skip (log-only) when no container exists,
/// otherwise contribute the collapse rule, the initial marker when the page
/// deep-links into comments, and the control inserted before the container.
pub fn plan_toggler(page: &Page, config: &EnhanceConfig, patch: &mut PagePatch) -> bool {
    let (container, index) = match resolve(page, &config.comment_candidates).found() {
        Some(found) => found,
        None => {
            info!("page has no comments section");
            return false;
        }
    };
    let selector = config.comment_candidates[index].selector.clone();

    patch.style_rules.push(collapse_rule(&selector));

    let state = initial_state(page);
    if state.is_expanded() {
        info!("comment anchor in page url, comments start expanded");
        patch.attr_sets.push(AttrSet {
            anchor: container.html(),
            name: MARKER_ATTR.to_string(),
            value: "1".to_string(),
        });
    }

    patch.insertions.push(Insertion {
        anchor: container.html(),
        placement: Placement::BeforeBegin,
        markup: control_markup(state, &selector),
    });
    info!(candidate = index, selector = %selector, "comment toggler planned");
    true
}

/// The control container, the button labelled with the next action, and the
/// one click handler that flips the marker attribute and relabels.
fn control_markup(state: ToggleState, container_selector: &str) -> String {
    format!(
        "<div id=\"graft-toggle-container\">\
         <button id=\"graft-toggle\" type=\"button\">{label}</button>\
         </div>\
         <script>(function () {{\
         var comments = document.querySelector('{selector}');\
         var toggle = document.getElementById('graft-toggle');\
         if (!comments || !toggle) return;\
         toggle.addEventListener('click', function () {{\
         if (comments.hasAttribute('{marker}')) comments.removeAttribute('{marker}');\
         else comments.setAttribute('{marker}', '1');\
         toggle.textContent = (comments.hasAttribute('{marker}') ? 'Collapse' : 'Expand') + ' Comments';\
         }});\
         }})()</script>",
        label = state.control_label(),
        selector = js_quote(container_selector),
        marker = MARKER_ATTR,
    )
}

fn js_quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
