//! Plan content and per-section version history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::{SectionId, SECTION_COUNT};

/// Everything known about one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionData {
    /// The user's own notes, editable at any time
    pub user_input: String,
    /// Currently active generated or selected text
    pub generated_content: String,
    /// Content came from the no-credential example path
    #[serde(default)]
    pub is_example: bool,
    /// Superseded contents, most recent first, never containing ""
    #[serde(default)]
    pub history: Vec<String>,
}

impl SectionData {
    /// Whether the section has active content
    pub fn is_complete(&self) -> bool {
        !self.generated_content.is_empty()
    }

    /// Replace the active content, archiving the old value when non-empty
    pub fn replace_content(&mut self, content: String) {
        let previous = std::mem::replace(&mut self.generated_content, content);
        if !previous.is_empty() {
            self.history.insert(0, previous);
        }
        self.is_example = false;
    }

    /// Show example content; history is left alone
    pub fn set_example(&mut self, content: String) {
        self.generated_content = content;
        self.is_example = true;
    }

    /// Swap the history entry at `index` back in as the active content
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn revert_to(&mut self, index: usize, version: String) -> bool {
        if index >= self.history.len() {
            return false;
        }
        self.history.remove(index);
        self.replace_content(version);
        true
    }

    /// Drop empty strings that older blobs may carry in history
    pub(crate) fn sanitize(&mut self) {
        self.history.retain(|entry| !entry.is_empty());
    }
}

/// A complete plan: one [`SectionData`] per section, always all present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPlan {
    pub user_identification: SectionData,
    pub application_objective: SectionData,
    pub key_features: SectionData,
    pub user_journey: SectionData,
    pub ui_design: SectionData,
    pub technology: SectionData,
    pub scalability_security: SectionData,
    pub monetization: SectionData,
    pub success_metrics: SectionData,
    pub competitive_advantage: SectionData,
    pub action_items: SectionData,
}

impl ProductPlan {
    /// A plan with every field empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, id: SectionId) -> &SectionData {
        match id {
            SectionId::UserIdentification => &self.user_identification,
            SectionId::ApplicationObjective => &self.application_objective,
            SectionId::KeyFeatures => &self.key_features,
            SectionId::UserJourney => &self.user_journey,
            SectionId::UiDesign => &self.ui_design,
            SectionId::Technology => &self.technology,
            SectionId::ScalabilitySecurity => &self.scalability_security,
            SectionId::Monetization => &self.monetization,
            SectionId::SuccessMetrics => &self.success_metrics,
            SectionId::CompetitiveAdvantage => &self.competitive_advantage,
            SectionId::ActionItems => &self.action_items,
        }
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut SectionData {
        match id {
            SectionId::UserIdentification => &mut self.user_identification,
            SectionId::ApplicationObjective => &mut self.application_objective,
            SectionId::KeyFeatures => &mut self.key_features,
            SectionId::UserJourney => &mut self.user_journey,
            SectionId::UiDesign => &mut self.ui_design,
            SectionId::Technology => &mut self.technology,
            SectionId::ScalabilitySecurity => &mut self.scalability_security,
            SectionId::Monetization => &mut self.monetization,
            SectionId::SuccessMetrics => &mut self.success_metrics,
            SectionId::CompetitiveAdvantage => &mut self.competitive_advantage,
            SectionId::ActionItems => &mut self.action_items,
        }
    }

    /// Sections paired with their data, in wizard order
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &SectionData)> + '_ {
        SectionId::ALL.into_iter().map(move |id| (id, self.section(id)))
    }

    /// (completed sections, total sections)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.iter().filter(|(_, data)| data.is_complete()).count();
        (done, SECTION_COUNT)
    }

    /// Parse a persisted blob; any missing section makes the blob invalid
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        let mut plan: ProductPlan = serde_json::from_str(blob)?;
        for id in SectionId::ALL {
            plan.section_mut(id).sanitize();
        }
        Ok(plan)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Plain-text rendering of the whole plan, used as generation context
    pub fn to_context(&self, order: &[SectionId]) -> String {
        let mut out = String::new();
        for &id in order {
            let data = self.section(id);
            out.push_str(&format!("## {}\n", id.title()));
            if !data.user_input.trim().is_empty() {
                out.push_str(&format!("User notes: {}\n", data.user_input.trim()));
            }
            if data.generated_content.trim().is_empty() {
                out.push_str("(not yet defined)\n");
            } else {
                out.push_str(data.generated_content.trim());
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Markdown rendering for review and export
    pub fn to_markdown(&self, generated_at: DateTime<Utc>) -> String {
        let (done, total) = self.progress();
        let mut md = String::new();
        md.push_str("# Product Plan\n\n");
        md.push_str(&format!(
            "Generated: {}\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        md.push_str(&format!("Progress: {}/{} sections\n\n---\n\n", done, total));

        for (index, (id, data)) in self.iter().enumerate() {
            md.push_str(&format!("## {}. {}\n\n", index + 1, id.title()));
            if !data.user_input.trim().is_empty() {
                md.push_str(&format!("> {}\n\n", data.user_input.trim()));
            }
            if data.generated_content.trim().is_empty() {
                md.push_str("_Not defined yet._\n\n");
            } else {
                md.push_str(data.generated_content.trim());
                if data.is_example {
                    md.push_str("\n\n_(example content)_");
                }
                md.push_str("\n\n");
            }
        }
        md
    }
}
