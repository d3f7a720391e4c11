//! Generation service
//!
//! The [`GenerationService`] trait is the seam between plan state and the
//! model. [`GeminiGenerator`] is the production implementation; tests swap in
//! scripted fakes.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::client::{AiClient, AiClientConfig};
use super::{examples, parsers, prompts};
use crate::config::GenerationConfig;
use crate::constants;
use crate::plan::{LeanCanvasData, ProductPlan, SectionId};

/// Produces section content, idea lists and canvas summaries
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Example content for a free section; needs no credential
    async fn example_content(&self, section_title: &str) -> Result<String>;

    /// A handful of alternative drafts for one section
    async fn section_ideas(
        &self,
        section_title: &str,
        user_input: &str,
        credential: &str,
    ) -> Result<Vec<String>>;

    /// Next steps derived from the whole plan
    async fn action_items(
        &self,
        plan: &ProductPlan,
        order: &[SectionId],
        notes: &str,
        credential: &str,
    ) -> Result<String>;

    /// Nine-block Lean Canvas, all blocks or an error
    async fn canvas_summary(
        &self,
        plan: &ProductPlan,
        order: &[SectionId],
        credential: &str,
    ) -> Result<LeanCanvasData>;
}

/// Gemini-backed generation
pub struct GeminiGenerator {
    config: AiClientConfig,
    idea_count: usize,
}

impl GeminiGenerator {
    pub fn new(config: AiClientConfig) -> Self {
        Self {
            config,
            idea_count: constants::ai::DEFAULT_IDEA_COUNT,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            config: AiClientConfig::from(config),
            idea_count: config.idea_count,
        }
    }

    /// Override how many drafts are requested per section
    pub fn with_idea_count(mut self, count: usize) -> Self {
        self.idea_count = count.max(1);
        self
    }

    fn client(&self, credential: &str) -> AiClient {
        AiClient::new(self.config.clone(), credential.to_string())
    }
}

#[async_trait]
impl GenerationService for GeminiGenerator {
    async fn example_content(&self, section_title: &str) -> Result<String> {
        examples::example_for_title(section_title)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No example content is available for {}", section_title))
    }

    async fn section_ideas(
        &self,
        section_title: &str,
        user_input: &str,
        credential: &str,
    ) -> Result<Vec<String>> {
        let prompt = prompts::section_ideas(section_title, user_input, self.idea_count);
        let value = self
            .client(credential)
            .call_json(prompts::PLANNER_SYSTEM_PROMPT, &prompt, prompts::ideas_schema())
            .await?;

        let ideas = parsers::parse_ideas(&value)?;
        debug!("Received {} ideas for {}", ideas.len(), section_title);
        Ok(ideas)
    }

    async fn action_items(
        &self,
        plan: &ProductPlan,
        order: &[SectionId],
        notes: &str,
        credential: &str,
    ) -> Result<String> {
        let prompt = prompts::action_items(plan, order, notes);
        let text = self
            .client(credential)
            .call_simple(prompts::PLANNER_SYSTEM_PROMPT, &prompt)
            .await?;
        info!("Generated action items ({} chars)", text.len());
        Ok(text)
    }

    async fn canvas_summary(
        &self,
        plan: &ProductPlan,
        order: &[SectionId],
        credential: &str,
    ) -> Result<LeanCanvasData> {
        let prompt = prompts::canvas_summary(plan, order);
        let value = self
            .client(credential)
            .call_json(
                prompts::PLANNER_SYSTEM_PROMPT,
                &prompt,
                prompts::canvas_schema(),
            )
            .await?;
        parsers::parse_canvas(value)
    }
}
