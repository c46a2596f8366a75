use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prose view of an analyzed repository: a summary plus ordered text sections.
///
/// Section titles are not unique. Lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResult {
    pub repo_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub sections: Vec<ExplainSection>,
}

impl ExplainResult {
    pub fn section(&self, title: &str) -> Option<&ExplainSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// First section titled `title`, else the first section of any title.
    pub fn section_or_first(&self, title: &str) -> Option<&ExplainSection> {
        self.section(title).or_else(|| self.sections.first())
    }

    /// First section whose title is any of `titles`.
    pub fn section_any(&self, titles: &[&str]) -> Option<&ExplainSection> {
        self.sections
            .iter()
            .find(|section| titles.contains(&section.title.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExplainSection {
    pub title: String,
    pub content: String,
}

impl ExplainSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
