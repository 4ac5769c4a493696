//! Platform identification.
//!
//! A platform is a named source site recognized by a list of URL substring
//! patterns. The rule list comes in as JSON from configuration, is validated
//! once at startup, and is immutable afterwards.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One named platform and the URL substrings that identify it.
///
/// Rule order and pattern order are both significant: the first rule whose
/// first matching pattern is found anywhere in the URL wins.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlatformRule {
    pub name: String,
    pub patterns: Vec<String>,
}

/// The full configured rule set.
#[derive(Debug, Clone)]
pub struct PlatformDirectory {
    rules: Vec<PlatformRule>,
}

impl PlatformDirectory {
    /// Parse and validate the JSON rule list from configuration.
    ///
    /// Invariants enforced here rather than at match time: at least one rule,
    /// and every rule carries at least one non-empty pattern. Patterns are
    /// lowercased on load so matching can stay allocation-free per pattern.
    pub fn from_json(raw: &str) -> Result<Self, PlatformConfigError> {
        let mut rules: Vec<PlatformRule> =
            serde_json::from_str(raw).map_err(PlatformConfigError::Malformed)?;

        if rules.is_empty() {
            return Err(PlatformConfigError::Empty);
        }
        for rule in &mut rules {
            if rule.patterns.is_empty() || rule.patterns.iter().any(|p| p.is_empty()) {
                return Err(PlatformConfigError::EmptyPatterns {
                    rule: rule.name.clone(),
                });
            }
            for pattern in &mut rule.patterns {
                *pattern = pattern.to_lowercase();
            }
        }

        Ok(Self { rules })
    }

    /// Map a raw URL to the owning platform name, if any.
    ///
    /// Case-insensitive substring containment; first match in rule order wins.
    pub fn identify(&self, url: &str) -> Option<&str> {
        let url = url.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|p| url.contains(p.as_str())))
            .map(|rule| rule.name.as_str())
    }

    /// Comma-joined, alphabetically sorted platform names for the `/platforms`
    /// reply. Recomputed on each call; the list is small.
    pub fn supported_platforms(&self) -> String {
        let mut names: Vec<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

/// Errors from parsing the platform rule configuration. Fatal at startup.
#[derive(Debug)]
pub enum PlatformConfigError {
    Malformed(serde_json::Error),
    Empty,
    EmptyPatterns { rule: String },
}

impl Display for PlatformConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformConfigError::Malformed(e) => {
                write!(f, "platform rule list is not valid JSON: {}", e)
            }
            PlatformConfigError::Empty => write!(f, "platform rule list is empty"),
            PlatformConfigError::EmptyPatterns { rule } => {
                write!(f, "platform rule '{}' has no usable patterns", rule)
            }
        }
    }
}

impl Error for PlatformConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> PlatformDirectory {
        PlatformDirectory::from_json(
            r#"[
                {"name": "tiktok", "patterns": ["tiktok.com", "vm.tiktok"]},
                {"name": "instagram", "patterns": ["instagram.com", "instagr.am"]},
                {"name": "youtube", "patterns": ["youtube.com", "youtu.be"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn identifies_by_substring() {
        let dir = directory();
        assert_eq!(
            dir.identify("https://www.tiktok.com/@u/video/123"),
            Some("tiktok")
        );
        assert_eq!(dir.identify("https://youtu.be/dQw4w9WgXcQ"), Some("youtube"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let dir = directory();
        assert_eq!(
            dir.identify("https://WWW.TikTok.COM/@u/video/123"),
            Some("tiktok")
        );
    }

    #[test]
    fn first_rule_in_order_wins() {
        let dir = PlatformDirectory::from_json(
            r#"[
                {"name": "first", "patterns": ["example.com"]},
                {"name": "second", "patterns": ["example.com/special"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(dir.identify("https://example.com/special/1"), Some("first"));
    }

    #[test]
    fn unknown_url_is_none() {
        let dir = directory();
        assert_eq!(dir.identify("https://unrelated.example.net/clip"), None);
    }

    #[test]
    fn supported_platforms_is_sorted_and_joined() {
        let dir = directory();
        assert_eq!(dir.supported_platforms(), "instagram, tiktok, youtube");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            PlatformDirectory::from_json("not json"),
            Err(PlatformConfigError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_rule_without_patterns() {
        let result = PlatformDirectory::from_json(r#"[{"name": "x", "patterns": []}]"#);
        assert!(matches!(
            result,
            Err(PlatformConfigError::EmptyPatterns { .. })
        ));
    }

    #[test]
    fn rejects_empty_rule_list() {
        assert!(matches!(
            PlatformDirectory::from_json("[]"),
            Err(PlatformConfigError::Empty)
        ));
    }
}
