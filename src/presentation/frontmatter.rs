//! Front matter handling.

use crate::document::{GlobalConfig, Warning};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Build the global configuration from a front matter block.
///
/// Malformed front matter is a recovered condition: the configuration falls
/// back to its defaults and a warning is recorded. An absent block is not
/// worth a warning.
pub(crate) fn parse(front_matter: Option<&str>, warnings: &mut Vec<Warning>) -> GlobalConfig {
    let Some(contents) = front_matter else {
        return GlobalConfig::default();
    };
    let raw = match serde_yaml::from_str::<RawFrontMatter>(contents) {
        Ok(raw) => raw,
        Err(error) => {
            warnings.push(Warning::new(0, format!("malformed front matter: {error}")));
            return GlobalConfig::default();
        }
    };
    let mut config = GlobalConfig::default();
    if let Some(title) = raw.title {
        config.title = title;
    }
    if let Some(theme) = raw.theme {
        config.theme = theme;
    }
    if let Some(aspect_ratio) = raw.aspect_ratio {
        match aspect_ratio.parse() {
            Ok(ratio) => config.aspect_ratio = ratio,
            Err(()) => warnings.push(Warning::new(0, format!("unknown aspect ratio '{aspect_ratio}'"))),
        }
    }
    if let Some(slide_numbers) = raw.slide_numbers {
        config.slide_numbers = slide_numbers;
    }
    config.author = raw.author;
    config.company = raw.company;
    config.logo_path = raw.logo_path;
    config.footer_text = raw.footer_text;
    config.variables = raw
        .variables
        .iter()
        .filter_map(|(key, value)| Some((key.clone(), crate::presentation::blocks::scalar_to_string(value)?)))
        .collect();
    config
}

#[derive(Deserialize, Default)]
struct RawFrontMatter {
    #[serde(default)]
    title: Option<String>,

    #[serde(default)]
    author: Option<String>,

    #[serde(default)]
    theme: Option<String>,

    #[serde(default)]
    aspect_ratio: Option<String>,

    #[serde(default)]
    slide_numbers: Option<bool>,

    #[serde(default)]
    company: Option<String>,

    #[serde(default)]
    logo_path: Option<String>,

    #[serde(default)]
    footer_text: Option<String>,

    #[serde(default)]
    variables: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::AspectRatio;

    #[test]
    fn full_front_matter() {
        let contents = "
title: Quarterly Review
author: Ada
theme: corporate
aspect_ratio: \"4:3\"
slide_numbers: false
footer_text: Confidential
variables:
  year: 2024
  audience: board
";
        let mut warnings = Vec::new();
        let config = parse(Some(contents), &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(config.title, "Quarterly Review");
        assert_eq!(config.author.as_deref(), Some("Ada"));
        assert_eq!(config.theme, "corporate");
        assert_eq!(config.aspect_ratio, AspectRatio::FourThree);
        assert!(!config.slide_numbers);
        assert_eq!(config.footer_text.as_deref(), Some("Confidential"));
        assert_eq!(config.variables.get("year").map(String::as_str), Some("2024"));
        assert_eq!(config.variables.get("audience").map(String::as_str), Some("board"));
    }

    #[test]
    fn absent_front_matter_defaults() {
        let mut warnings = Vec::new();
        let config = parse(None, &mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(config.title, "Presentation");
        assert_eq!(config.theme, "default");
        assert_eq!(config.aspect_ratio, AspectRatio::SixteenNine);
        assert!(config.slide_numbers);
    }

    #[test]
    fn malformed_front_matter_recovers() {
        let mut warnings = Vec::new();
        let config = parse(Some(": not : yaml : at all ["), &mut warnings);
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("malformed front matter"));
    }

    #[test]
    fn unknown_aspect_ratio_recovers() {
        let mut warnings = Vec::new();
        let config = parse(Some("aspect_ratio: \"21:9\""), &mut warnings);
        assert_eq!(config.aspect_ratio, AspectRatio::SixteenNine);
        assert_eq!(warnings.len(), 1);
    }
}
