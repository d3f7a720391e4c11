//! The fixed catalog of plan sections
//!
//! Declaration order is wizard order. The camelCase id doubles as the key in
//! the persisted plan blob, so renaming a variant's id breaks stored plans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of sections in every plan
pub const SECTION_COUNT: usize = 11;

/// One of the topics a product plan is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    UserIdentification,
    ApplicationObjective,
    KeyFeatures,
    UserJourney,
    UiDesign,
    Technology,
    ScalabilitySecurity,
    Monetization,
    SuccessMetrics,
    CompetitiveAdvantage,
    ActionItems,
}

/// Sections that can produce example content without a credential
pub const FREE_SECTIONS: [SectionId; 2] =
    [SectionId::UserIdentification, SectionId::ApplicationObjective];

impl SectionId {
    /// All sections in wizard order
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::UserIdentification,
        SectionId::ApplicationObjective,
        SectionId::KeyFeatures,
        SectionId::UserJourney,
        SectionId::UiDesign,
        SectionId::Technology,
        SectionId::ScalabilitySecurity,
        SectionId::Monetization,
        SectionId::SuccessMetrics,
        SectionId::CompetitiveAdvantage,
        SectionId::ActionItems,
    ];

    /// The final, whole-plan section
    pub const LAST: SectionId = SectionId::ActionItems;

    /// Position in wizard order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at a wizard position
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Persisted key
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::UserIdentification => "userIdentification",
            SectionId::ApplicationObjective => "applicationObjective",
            SectionId::KeyFeatures => "keyFeatures",
            SectionId::UserJourney => "userJourney",
            SectionId::UiDesign => "uiDesign",
            SectionId::Technology => "technology",
            SectionId::ScalabilitySecurity => "scalabilitySecurity",
            SectionId::Monetization => "monetization",
            SectionId::SuccessMetrics => "successMetrics",
            SectionId::CompetitiveAdvantage => "competitiveAdvantage",
            SectionId::ActionItems => "actionItems",
        }
    }

    /// Heading shown to the user and sent to the generation service
    pub fn title(self) -> &'static str {
        match self {
            SectionId::UserIdentification => "User Identification",
            SectionId::ApplicationObjective => "Application Objective",
            SectionId::KeyFeatures => "Key Features (MVP)",
            SectionId::UserJourney => "User Journey (UX)",
            SectionId::UiDesign => "Interface Design (UI)",
            SectionId::Technology => "Recommended Technology",
            SectionId::ScalabilitySecurity => "Scalability and Security",
            SectionId::Monetization => "Monetization (if applicable)",
            SectionId::SuccessMetrics => "Success Metrics",
            SectionId::CompetitiveAdvantage => "Competitive Advantage",
            SectionId::ActionItems => "Next Steps",
        }
    }

    /// Guidance text for the step
    pub fn description(self) -> &'static str {
        match self {
            SectionId::UserIdentification => {
                "Who is your target audience? Describe their demographics, behaviours and needs. What problems do they face today?"
            }
            SectionId::ApplicationObjective => {
                "What is the core purpose of your application in one simple sentence? How does it solve the user's problems?"
            }
            SectionId::KeyFeatures => {
                "List the 3-5 most important features for your Minimum Viable Product. Prioritise usability and immediate value."
            }
            SectionId::UserJourney => {
                "Describe the ideal user flow, from first contact to reaching the desired outcome. How will you reduce friction?"
            }
            SectionId::UiDesign => {
                "Define the visual style: colours, typography, layout and accessibility principles. What will the main screens look like?"
            }
            SectionId::Technology => {
                "Suggest the best languages, frameworks and databases. Will it be a web, mobile or hybrid application?"
            }
            SectionId::ScalabilitySecurity => {
                "How will the application handle growth? Which security measures (authentication, encryption) will be implemented?"
            }
            SectionId::Monetization => {
                "Propose the revenue models that best fit your user profile (e.g. subscription, freemium, ads)."
            }
            SectionId::SuccessMetrics => {
                "Define the key performance indicators (KPIs) that measure success, such as retention, engagement and conversion."
            }
            SectionId::CompetitiveAdvantage => {
                "What makes your application unique and hard to copy?"
            }
            SectionId::ActionItems => {
                "Based on the whole plan, generate a list of actionable next steps. You can add notes to guide the AI."
            }
        }
    }

    /// Whether example content is available without a credential
    pub fn is_free(self) -> bool {
        FREE_SECTIONS.contains(&self)
    }

    /// Whether this is the terminal whole-plan section
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Look a section up by its display title
    pub fn from_title(title: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|s| s.title() == title)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}
