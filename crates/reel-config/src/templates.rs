//! Configuration templates for `reel init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Comment lines and empty lines are kept; every other line gets a `# ` prefix.
pub fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;
    use crate::{
        merge::{ParsedConfig, merge_configs},
        parse::parse_config_str,
    };

    #[test]
    fn templates_are_valid_configs() {
        for template in [LOCAL_TEMPLATE, GLOBAL_TEMPLATE] {
            let config = parse_config_str(template, Path::new("template.toml")).unwrap();
            // Names in the templates must survive merge-time checks too.
            merge_configs(&[ParsedConfig {
                path: Path::new("/srv/reel/.reel.toml").to_path_buf(),
                config,
            }])
            .unwrap();
        }
    }

    #[test]
    fn commented_templates_parse_empty() {
        for template in [local_template(), global_template()] {
            let config = parse_config_str(&template, Path::new("init.toml")).unwrap();
            assert!(config.corpus.is_none());
            assert!(config.features.is_none());
        }
    }

    #[test]
    fn preserves_comments_and_blank_lines() {
        let input = "# heading\n[corpus]\n\nlimit = 10\n";
        assert_eq!(
            comment_template(input),
            "# heading\n# [corpus]\n\n# limit = 10\n"
        );
    }
}
