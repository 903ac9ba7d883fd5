use graft_core::{Accept, Candidate, PlatformSignal, PlatformSignalKind};
use graft_dom::{resolve, Page, Resolution};
use tracing::info;

/// Ordered detection chain: the generator meta tag first, then the footer
/// credit links WordPress themes commonly emit.
pub fn wordpress_candidates() -> Vec<Candidate> {
    vec![
        Candidate::accepting(
            "meta[name=\"generator\"]",
            Accept::AttrPrefix {
                attr: "content".into(),
                prefix: "WordPress".into(),
            },
        ),
        Candidate::bare("#footer .footer-wrap a[href*=\"wordpress.com\"]"),
        Candidate::bare("#footer2 a[href*=\"wordpress.org\"]"),
        Candidate::bare("footer .site-info a[href*=\"wordpress.org\"]"),
    ]
}

pub fn detect_wordpress(page: &Page) -> Option<PlatformSignal> {
    detect_with(page, &wordpress_candidates())
}

/// Run detection over a caller-supplied candidate chain. The signal kind is
/// read off the matched element: a meta tag reports its content, anything
/// else reports the link target.
pub fn detect_with(page: &Page, candidates: &[Candidate]) -> Option<PlatformSignal> {
    match resolve(page, candidates) {
        Resolution::Found { element, index } => {
            let signal = if element.value().name() == "meta" {
                PlatformSignal {
                    kind: PlatformSignalKind::GeneratorMeta,
                    evidence: format!(
                        "generator meta: {}",
                        element.value().attr("content").unwrap_or_default()
                    ),
                }
            } else {
                PlatformSignal {
                    kind: PlatformSignalKind::FooterLink,
                    evidence: format!(
                        "footer link: {}",
                        element.value().attr("href").unwrap_or_default()
                    ),
                }
            };
            info!(candidate = index, evidence = %signal.evidence, "wordpress detected");
            Some(signal)
        }
        Resolution::NotFound => None,
    }
}

pub fn is_wordpress(page: &Page) -> bool {
    detect_wordpress(page).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_meta_detects_wordpress() {
        let page = Page::parse(
            "<html><head><meta name=\"generator\" content=\"WordPress 6.4\"></head><body></body></html>",
        );
        let signal = detect_wordpress(&page).expect("signal");
        assert_eq!(signal.kind, PlatformSignalKind::GeneratorMeta);
        assert!(signal.evidence.contains("WordPress 6.4"));
        assert!(is_wordpress(&page));
    }

    #[test]
    fn foreign_generator_is_not_wordpress() {
        let page = Page::parse(
            "<html><head><meta name=\"generator\" content=\"Joomla 5.0\"></head><body></body></html>",
        );
        assert!(!is_wordpress(&page));
    }

    #[test]
    fn footer_credit_link_detects_wordpress() {
        let page = Page::parse(
            "<html><body><footer><div class=\"site-info\">\
             <a href=\"https://wordpress.org\">Proudly powered by WordPress</a>\
             </div></footer></body></html>",
        );
        let signal = detect_wordpress(&page).expect("signal");
        assert_eq!(signal.kind, PlatformSignalKind::FooterLink);
        assert!(signal.evidence.contains("wordpress.org"));
    }

    #[test]
    fn rejected_generator_still_falls_through_to_footer_links() {
        let page = Page::parse(
            "<html><head><meta name=\"generator\" content=\"Joomla 5.0\"></head>\
             <body><footer><div class=\"site-info\">\
             <a href=\"https://wordpress.org\">powered by</a>\
             </div></footer></body></html>",
        );
        let signal = detect_wordpress(&page).expect("signal");
        assert_eq!(signal.kind, PlatformSignalKind::FooterLink);
    }

    #[test]
    fn unrelated_page_is_not_detected() {
        let page = Page::parse("<html><body><p>hello</p></body></html>");
        assert!(detect_wordpress(&page).is_none());
    }
}
