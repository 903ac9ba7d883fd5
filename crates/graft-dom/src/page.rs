use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

/// A parsed page plus the URL it was served from. All enhancement logic
/// reads the document through this wrapper instead of holding raw tree
/// handles.
pub struct Page {
    html: Html,
    doctype: Option<String>,
    url: Option<Url>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            doctype: leading_doctype(html),
            html: Html::parse_document(html),
            url: None,
        }
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn url_fragment(&self) -> Option<&str> {
        self.url.as_ref().and_then(|url| url.fragment())
    }

    /// First element matching `selector`, or `None`. An unparsable selector
    /// counts as no match so a fallback chain is never aborted mid-scan.
    pub fn first_match(&self, selector: &str) -> Option<ElementRef<'_>> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(selector = %selector, error = %e, "unparsable selector treated as no match");
                return None;
            }
        };
        self.html.select(&parsed).next()
    }

    /// Serialized document, with the source's doctype line carried over
    /// (serialization starts at the root element).
    pub fn document_html(&self) -> String {
        let root = self.html.root_element().html();
        match &self.doctype {
            Some(doctype) => format!("{}\n{}", doctype, root),
            None => root,
        }
    }
}

fn leading_doctype(html: &str) -> Option<String> {
    let trimmed = html.trim_start();
    if !trimmed.get(..9).is_some_and(|head| head.eq_ignore_ascii_case("<!doctype")) {
        return None;
    }
    trimmed.find('>').map(|end| trimmed[..=end].to_string())
}
