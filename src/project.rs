//! Project record data model
//!
//! Records are deserialized once from the catalog file and are read-only for
//! the rest of the session. Deserialization is deliberately lenient: the
//! catalog is hand-edited JSON and a sloppy `details` value should degrade to
//! an empty section, never a parse failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{carousel, fallback};

/// How a project link behaves when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    /// Opens the URL
    #[default]
    Normal,
    /// Placeholder: rendered visually distinct, never navigates
    ComingSoon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLink {
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "techTags")]
    pub tech_tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
    #[serde(default, deserialize_with = "deserialize_details")]
    pub details: BTreeMap<String, Vec<String>>,
}

impl ProjectRecord {
    /// Synthetic record substituted when the catalog cannot be loaded.
    /// Every collection is empty so downstream rendering needs no special case.
    pub fn load_failure() -> Self {
        Self {
            id: 0,
            title: fallback::TITLE.to_string(),
            description: fallback::DESCRIPTION.to_string(),
            tech_tags: Vec::new(),
            links: Vec::new(),
            stats: Vec::new(),
            details: BTreeMap::new(),
        }
    }

    /// Tags shown on the carousel card (the overlay shows `tech_tags` whole)
    pub fn card_tags(&self) -> &[String] {
        let limit = carousel::CARD_TAG_LIMIT.min(self.tech_tags.len());
        &self.tech_tags[..limit]
    }

    /// Count of tags hidden behind the card's tag limit
    pub fn hidden_tag_count(&self) -> usize {
        self.tech_tags.len().saturating_sub(carousel::CARD_TAG_LIMIT)
    }
}

/// Accepts any JSON shape for a details value: arrays keep their string
/// items, everything else (object, number, string, null) becomes an empty
/// list. No upstream schema is enforced, so a bad value must not be an error.
fn deserialize_details<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: BTreeMap<String, Value> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(section, value)| {
            let items = match value {
                Value::Array(entries) => entries
                    .into_iter()
                    .filter_map(|entry| match entry {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
                _ => Vec::new(),
            };
            (section, items)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind_defaults_to_normal() {
        let link: ProjectLink = serde_json::from_str(r#"{"text": "Demo", "url": "https://x"}"#)
            .expect("link should parse");
        assert_eq!(link.kind, LinkKind::Normal);
    }

    #[test]
    fn test_link_kind_coming_soon() {
        let link: ProjectLink =
            serde_json::from_str(r#"{"text": "Docs", "url": "", "kind": "comingSoon"}"#)
                .expect("link should parse");
        assert_eq!(link.kind, LinkKind::ComingSoon);
    }

    #[test]
    fn test_details_keeps_string_arrays() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{"title": "p", "details": {"Features": ["a", "b"], "Stack": ["c"]}}"#,
        )
        .expect("record should parse");
        assert_eq!(record.details["Features"], vec!["a", "b"]);
        assert_eq!(record.details["Stack"], vec!["c"]);
    }

    #[test]
    fn test_details_non_array_degrades_to_empty() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{"title": "p", "details": {"Oops": {"nested": true}, "Num": 7, "Text": "x"}}"#,
        )
        .expect("lenient details must not fail the record");
        assert!(record.details["Oops"].is_empty());
        assert!(record.details["Num"].is_empty());
        assert!(record.details["Text"].is_empty());
    }

    #[test]
    fn test_details_skips_non_string_items() {
        let record: ProjectRecord =
            serde_json::from_str(r#"{"title": "p", "details": {"Mixed": ["a", 1, null, "b"]}}"#)
                .expect("record should parse");
        assert_eq!(record.details["Mixed"], vec!["a", "b"]);
    }

    #[test]
    fn test_card_tags_truncates_to_limit() {
        let mut record = ProjectRecord::load_failure();
        record.tech_tags = (0..15).map(|i| format!("tag{i}")).collect();
        assert_eq!(record.card_tags().len(), 10);
        assert_eq!(record.hidden_tag_count(), 5);
        // The overlay renders the full list
        assert_eq!(record.tech_tags.len(), 15);
    }

    #[test]
    fn test_card_tags_short_list_untouched() {
        let mut record = ProjectRecord::load_failure();
        record.tech_tags = vec!["a".into(), "b".into()];
        assert_eq!(record.card_tags(), ["a", "b"]);
        assert_eq!(record.hidden_tag_count(), 0);
    }

    #[test]
    fn test_load_failure_record_is_all_empty() {
        let record = ProjectRecord::load_failure();
        assert_eq!(record.title, crate::constants::fallback::TITLE);
        assert!(record.tech_tags.is_empty());
        assert!(record.links.is_empty());
        assert!(record.stats.is_empty());
        assert!(record.details.is_empty());
    }
}
