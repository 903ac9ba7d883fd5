/// Base rules for the injected containers. Feature-specific rules are
/// appended to the same list and everything is installed as one stylesheet.
pub fn base_rules() -> Vec<String> {
    vec![
        "#graft-dates-container { text-align: center; margin-bottom: 25px }".to_string(),
        "#graft-toggle-container { text-align: center; margin-bottom: 25px }".to_string(),
        "#graft-toggle { width: 100% }".to_string(),
    ]
}

pub fn stylesheet(rules: &[String]) -> String {
    rules.join("\n")
}

pub fn style_element(rules: &[String]) -> String {
    format!("<style id=\"graft-style\">\n{}\n</style>", stylesheet(rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_join_into_one_stylesheet() {
        let mut rules = base_rules();
        rules.push(".comments-area { height: 0 }".to_string());
        let sheet = stylesheet(&rules);
        assert_eq!(sheet.lines().count(), 4);
        assert!(sheet.ends_with(".comments-area { height: 0 }"));
    }

    #[test]
    fn style_element_wraps_all_rules() {
        let element = style_element(&base_rules());
        assert!(element.starts_with("<style id=\"graft-style\">"));
        assert!(element.contains("#graft-toggle { width: 100% }"));
        assert!(element.ends_with("</style>"));
    }
}
