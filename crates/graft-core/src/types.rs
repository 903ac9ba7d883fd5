use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One entry in an ordered fallback chain: a CSS selector plus an optional
/// acceptance check applied to the first element the selector matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub selector: String,
    #[serde(default)]
    pub accept: Option<Accept>,
}

impl Candidate {
    pub fn bare(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            accept: None,
        }
    }

    pub fn accepting(selector: impl Into<String>, accept: Accept) -> Self {
        Self {
            selector: selector.into(),
            accept: Some(accept),
        }
    }
}

/// Acceptance checks are data, not closures, so candidate lists can be
/// declared in config files and compared in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Accept {
    AttrPrefix { attr: String, prefix: String },
    AttrPattern { attr: String, pattern: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSignal {
    pub kind: PlatformSignalKind,
    pub evidence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformSignalKind {
    GeneratorMeta,
    FooterLink,
}

/// Publish/modify timestamps lifted from article metadata. Labels render in
/// fixed order: published first, then modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleDates {
    pub published: Option<DateTime<FixedOffset>>,
    pub modified: Option<DateTime<FixedOffset>>,
}

impl ArticleDates {
    pub fn is_empty(&self) -> bool {
        self.published.is_none() && self.modified.is_none()
    }

    pub fn entries(&self) -> Vec<(&'static str, DateTime<FixedOffset>)> {
        let mut out = Vec::new();
        if let Some(published) = self.published {
            out.push(("published", published));
        }
        if let Some(modified) = self.modified {
            out.push(("modified", modified));
        }
        out
    }
}

/// Comment-section visibility. The marker attribute on the page is a
/// projection of this enum, written only at the rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleState {
    Collapsed,
    Expanded,
}

impl ToggleState {
    pub fn flip(self) -> Self {
        match self {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, ToggleState::Expanded)
    }

    /// Label for the toggle control: the action the next click performs.
    pub fn control_label(self) -> &'static str {
        match self {
            ToggleState::Collapsed => "Expand Comments",
            ToggleState::Expanded => "Collapse Comments",
        }
    }
}

/// Accumulated plan of page mutations. Features append to it; the renderer
/// applies it to the serialized page in one pass, joining the style rules
/// into a single installed stylesheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagePatch {
    pub insertions: Vec<Insertion>,
    pub attr_sets: Vec<AttrSet>,
    pub style_rules: Vec<String>,
}

impl PagePatch {
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.attr_sets.is_empty() && self.style_rules.is_empty()
    }
}

/// New markup spliced in next to an existing element. `anchor` holds the
/// anchor element's serialized form, which the renderer locates in the
/// serialized document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insertion {
    pub anchor: String,
    pub placement: Placement,
    pub markup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    BeforeBegin,
    AfterEnd,
}

/// An attribute stamped onto an existing element's opening tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttrSet {
    pub anchor: String,
    pub name: String,
    pub value: String,
}

/// What one enhancement run did. `html` is `None` when platform detection
/// failed and the page was left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceOutcome {
    pub platform: Option<PlatformSignal>,
    pub dates_inserted: bool,
    pub toggler_inserted: bool,
    pub html: Option<String>,
}
