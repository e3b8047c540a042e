//! Content records loaded from the static JSON collections.
//!
//! All records are read once at startup and never mutated. Every field
//! defaults to empty when missing from the JSON so a malformed entry
//! renders as a sparse card instead of failing the whole section.
//!
//! Field names follow the JSON the content directory ships with
//! (`imageSrc`, `startDate`, `demo`, ...). The longer descriptive names
//! (`imageReference`, `demoLink`, `sourceLink`) are accepted as aliases.
//! An explicit `null` is read the same as a missing field.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A technology shown in the experience section's skills grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default", alias = "imageReference")]
    pub image_src: String,
}

/// One position in the work history.
///
/// Entries are displayed in file order (reverse-chronological by
/// convention); no sorting is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organisation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default", alias = "imageReference")]
    pub image_src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experiences: Vec<String>,
}

impl HistoryEntry {
    /// `"Jan 2020 - Present"`, or whichever side is known.
    pub fn date_range(&self) -> String {
        match (self.start_date.trim(), self.end_date.trim()) {
            ("", "") => String::new(),
            (start, "") => start.to_string(),
            ("", end) => end.to_string(),
            (start, end) => format!("{start} - {end}"),
        }
    }
}

/// A portfolio project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default", alias = "imageReference")]
    pub image_src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default", alias = "demoLink")]
    pub demo: String,
    #[serde(deserialize_with = "null_as_default", alias = "sourceLink")]
    pub source: String,
}

impl ProjectEntry {
    /// Skill tags in their given order with duplicates and blanks removed.
    pub fn skill_tags(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            let tag = skill.trim();
            if !tag.is_empty() && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }
}

/// A role card in the about section ("Frontend Developer", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default", alias = "imageReference")]
    pub image_src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_parses_image_src() {
        let skill: SkillEntry =
            serde_json::from_str(r#"{"title": "Rust", "imageSrc": "skills/rust.png"}"#).unwrap();
        assert_eq!(skill.title, "Rust");
        assert_eq!(skill.image_src, "skills/rust.png");
    }

    #[test]
    fn image_reference_alias_accepted() {
        let skill: SkillEntry =
            serde_json::from_str(r#"{"title": "Go", "imageReference": "skills/go.png"}"#)
                .unwrap();
        assert_eq!(skill.image_src, "skills/go.png");
    }

    #[test]
    fn history_missing_fields_default_to_empty() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"role": "Engineer"}"#).unwrap();
        assert_eq!(entry.role, "Engineer");
        assert!(entry.organisation.is_empty());
        assert!(entry.experiences.is_empty());
        assert!(entry.image_src.is_empty());
    }

    #[test]
    fn null_fields_read_as_empty() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"role": "Engineer", "organisation": null, "imageSrc": null, "experiences": null}"#,
        )
        .unwrap();
        assert_eq!(entry.role, "Engineer");
        assert!(entry.organisation.is_empty());
        assert!(entry.image_src.is_empty());
        assert!(entry.experiences.is_empty());

        let project: ProjectEntry =
            serde_json::from_str(r#"{"title": "P", "skills": null, "demoLink": null}"#).unwrap();
        assert!(project.skill_tags().is_empty());
        assert!(project.demo.is_empty());
    }

    #[test]
    fn history_experiences_keep_order() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"role": "Lead", "experiences": ["Built X", "Led Y"]}"#,
        )
        .unwrap();
        assert_eq!(entry.experiences, vec!["Built X", "Led Y"]);
    }

    #[test]
    fn date_range_variants() {
        let mut entry = HistoryEntry {
            start_date: "Jan 2020".into(),
            end_date: "Present".into(),
            ..Default::default()
        };
        assert_eq!(entry.date_range(), "Jan 2020 - Present");
        entry.end_date.clear();
        assert_eq!(entry.date_range(), "Jan 2020");
        entry.start_date.clear();
        assert_eq!(entry.date_range(), "");
    }

    #[test]
    fn project_link_aliases() {
        let project: ProjectEntry = serde_json::from_str(
            r#"{"title": "P", "demoLink": "https://demo", "sourceLink": "https://src"}"#,
        )
        .unwrap();
        assert_eq!(project.demo, "https://demo");
        assert_eq!(project.source, "https://src");
    }

    #[test]
    fn skill_tags_dedup_and_keep_order() {
        let project = ProjectEntry {
            skills: vec![
                "React".into(),
                "Node".into(),
                "React".into(),
                "  ".into(),
                "CSS".into(),
            ],
            ..Default::default()
        };
        assert_eq!(project.skill_tags(), vec!["React", "Node", "CSS"]);
    }

    #[test]
    fn skill_tags_empty_when_no_skills() {
        let project = ProjectEntry::default();
        assert!(project.skill_tags().is_empty());
    }
}
