use graft_core::{Candidate, GraftError, GraftResult};
use graft_enhance::EnhanceConfig;
use serde::Deserialize;

/// Optional overrides for the built-in candidate chains and formatting. Any
/// omitted section keeps its defaults.
#[derive(Debug, Default, Deserialize)]
pub struct GraftConfig {
    pub detection: Option<DetectionConfig>,
    pub dates: Option<DatesConfig>,
    pub comments: Option<CommentsConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DetectionConfig {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct DatesConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub title_candidates: Vec<Candidate>,
    pub format: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

fn default_enabled() -> bool {
    true
}

impl GraftConfig {
    pub fn from_file(path: &str) -> GraftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GraftError::Config(e.to_string()))
    }

    pub fn into_enhance_config(self) -> EnhanceConfig {
        let mut config = EnhanceConfig::default();
        if let Some(detection) = self.detection {
            if !detection.candidates.is_empty() {
                config.platform_candidates = detection.candidates;
            }
        }
        if let Some(dates) = self.dates {
            config.dates_enabled = dates.enabled;
            if !dates.title_candidates.is_empty() {
                config.title_candidates = dates.title_candidates;
            }
            if let Some(format) = dates.format {
                config.date_format = format;
            }
        }
        if let Some(comments) = self.comments {
            config.toggler_enabled = comments.enabled;
            if !comments.candidates.is_empty() {
                config.comment_candidates = comments.candidates;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_every_default() {
        let parsed: GraftConfig = toml::from_str("").expect("parse");
        let config = parsed.into_enhance_config();
        let defaults = EnhanceConfig::default();
        assert_eq!(
            config.platform_candidates.len(),
            defaults.platform_candidates.len()
        );
        assert_eq!(config.date_format, defaults.date_format);
        assert!(config.dates_enabled);
        assert!(config.toggler_enabled);
    }

    #[test]
    fn sections_override_their_piece_only() {
        let parsed: GraftConfig = toml::from_str(
            r##"
            [dates]
            enabled = false
            format = "%Y-%m-%d"

            [comments]
            [[comments.candidates]]
            selector = "#custom-comments"
            "##,
        )
        .expect("parse");
        let config = parsed.into_enhance_config();

        assert!(!config.dates_enabled);
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert!(config.toggler_enabled);
        assert_eq!(config.comment_candidates.len(), 1);
        assert_eq!(config.comment_candidates[0].selector, "#custom-comments");
        assert_eq!(
            config.platform_candidates.len(),
            EnhanceConfig::default().platform_candidates.len()
        );
    }

    #[test]
    fn detection_candidates_accept_checks_parse() {
        let parsed: GraftConfig = toml::from_str(
            r#"
            [[detection.candidates]]
            selector = 'meta[name="generator"]'

            [detection.candidates.accept]
            kind = "attr_prefix"
            attr = "content"
            prefix = "WordPress"
            "#,
        )
        .expect("parse");
        let config = parsed.into_enhance_config();
        assert_eq!(config.platform_candidates.len(), 1);
        assert!(config.platform_candidates[0].accept.is_some());
    }
}
