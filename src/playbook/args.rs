//! Playbook argument surface.
//!
//! The pipeline is invoked programmatically with CLI-style arguments; this
//! module defines the recognized flags using clap. No binary name is
//! expected at the front of the argument list.

use super::markup::AttributeValue;
use clap::Parser;
use std::path::PathBuf;

/// Arguments recognized by the playbook builder
#[derive(Parser, Debug, Clone)]
#[command(name = "sitewright", version, about, long_about = None, no_binary_name = true)]
pub struct PlaybookArgs {
    /// Playbook file describing the site to build
    #[arg(default_value = "site.toml")]
    pub playbook: PathBuf,

    /// Output directory path (overrides [output.dir])
    #[arg(long = "to-dir")]
    pub to_dir: Option<PathBuf>,

    /// Base URL of the published site (overrides [site.url])
    #[arg(long)]
    pub url: Option<String>,

    /// Site title (overrides [site.title])
    #[arg(long)]
    pub title: Option<String>,

    /// Remove the destination directory before publishing
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub clean: Option<bool>,

    /// UI bundle URL (overrides [ui.bundle.url])
    #[arg(long = "ui-bundle-url")]
    pub ui_bundle_url: Option<String>,

    /// Document attribute, as `name=value`, bare `name`, or `name!` to unset.
    /// May repeat.
    #[arg(long = "attribute", value_name = "NAME[=VALUE]")]
    pub attributes: Vec<String>,
}

impl PlaybookArgs {
    /// Parse an argument slice without exiting the process on failure.
    pub fn parse_from_slice(args: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }
}

/// Split an `--attribute` spec into a name and value.
///
/// Forms: `name=value` assigns (with `true`/`false` parsed as booleans),
/// bare `name` assigns the empty string, and a trailing `!` soft-unsets.
pub fn parse_attribute(spec: &str) -> (String, AttributeValue) {
    if let Some((name, value)) = spec.split_once('=') {
        let value = match value {
            "true" => AttributeValue::Bool(true),
            "false" => AttributeValue::Bool(false),
            _ => AttributeValue::Str(value.to_string()),
        };
        return (name.to_string(), value);
    }
    if let Some(name) = spec.strip_suffix('!') {
        return (name.to_string(), AttributeValue::Bool(false));
    }
    (spec.to_string(), AttributeValue::Str(String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> PlaybookArgs {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        PlaybookArgs::parse_from_slice(&args).unwrap()
    }

    // ------------------------------------------------------------------------
    // Argument parsing
    // ------------------------------------------------------------------------

    #[test]
    fn test_args_defaults() {
        let args = parse(&[]);

        assert_eq!(args.playbook, PathBuf::from("site.toml"));
        assert_eq!(args.to_dir, None);
        assert_eq!(args.url, None);
        assert_eq!(args.title, None);
        assert_eq!(args.clean, None);
        assert_eq!(args.ui_bundle_url, None);
        assert!(args.attributes.is_empty());
    }

    #[test]
    fn test_args_positional_playbook() {
        let args = parse(&["docs.toml"]);
        assert_eq!(args.playbook, PathBuf::from("docs.toml"));
    }

    #[test]
    fn test_args_overrides() {
        let args = parse(&[
            "docs.toml",
            "--to-dir",
            "public",
            "--url",
            "https://docs.example.com",
            "--title",
            "Docs",
        ]);

        assert_eq!(args.to_dir, Some(PathBuf::from("public")));
        assert_eq!(args.url, Some("https://docs.example.com".into()));
        assert_eq!(args.title, Some("Docs".into()));
    }

    #[test]
    fn test_args_clean_flag_forms() {
        // Bare flag means true
        assert_eq!(parse(&["--clean"]).clean, Some(true));
        // Explicit value
        assert_eq!(parse(&["--clean", "false"]).clean, Some(false));
        // Absent means no override
        assert_eq!(parse(&[]).clean, None);
    }

    #[test]
    fn test_args_repeated_attributes() {
        let args = parse(&[
            "--attribute",
            "site-component=graphgists",
            "--attribute",
            "experimental",
        ]);

        assert_eq!(
            args.attributes,
            vec![
                "site-component=graphgists".to_string(),
                "experimental".to_string()
            ]
        );
    }

    #[test]
    fn test_args_unknown_flag_rejected() {
        let args = vec!["--no-such-flag".to_string()];
        assert!(PlaybookArgs::parse_from_slice(&args).is_err());
    }

    // ------------------------------------------------------------------------
    // Attribute spec parsing
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_attribute_assignment() {
        assert_eq!(
            parse_attribute("site-component=graphgists"),
            ("site-component".into(), AttributeValue::Str("graphgists".into()))
        );
    }

    #[test]
    fn test_parse_attribute_boolean_values() {
        assert_eq!(
            parse_attribute("experimental=true"),
            ("experimental".into(), AttributeValue::Bool(true))
        );
        assert_eq!(
            parse_attribute("experimental=false"),
            ("experimental".into(), AttributeValue::Bool(false))
        );
    }

    #[test]
    fn test_parse_attribute_bare_name() {
        assert_eq!(
            parse_attribute("icons"),
            ("icons".into(), AttributeValue::Str(String::new()))
        );
    }

    #[test]
    fn test_parse_attribute_unset() {
        assert_eq!(
            parse_attribute("sectanchors!"),
            ("sectanchors".into(), AttributeValue::Bool(false))
        );
    }

    #[test]
    fn test_parse_attribute_value_containing_equals() {
        // Only the first `=` splits
        assert_eq!(
            parse_attribute("query=a=b"),
            ("query".into(), AttributeValue::Str("a=b".into()))
        );
    }
}
