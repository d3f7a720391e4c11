//! Plan state manager
//!
//! Owns the plan, wizard navigation, pending idea lists, the credential and the
//! canvas. Every accepted plan mutation is written back to the persistence
//! store before the operation returns.
//!
//! Failures are returned to the caller and also kept as display state: plan
//! errors and canvas errors live in separate slots so one view's message never
//! overwrites the other's.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::canvas::LeanCanvasData;
use super::data::{ProductPlan, SectionData};
use super::error::PlanError;
use super::section::{SectionId, SECTION_COUNT};
use crate::ai::GenerationService;
use crate::constants::storage::{CREDENTIAL_KEY, PLAN_KEY};
use crate::storage::PersistenceStore;

/// Which of the three presentation modes is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Step-by-step editing (or the landing page when not started)
    #[default]
    Editing,
    /// Read-only review of the assembled plan
    PlanReview,
    /// Lean Canvas review
    CanvasReview,
}

/// The single owner of plan state
pub struct PlanManager {
    plan: ProductPlan,
    suggestions: HashMap<SectionId, Vec<String>>,
    current_step: Option<usize>,
    view: ViewMode,
    credential: Option<String>,
    canvas: Option<LeanCanvasData>,
    error: Option<PlanError>,
    canvas_error: Option<PlanError>,
    settings_requested: bool,
    store: Box<dyn PersistenceStore>,
    generator: Arc<dyn GenerationService>,
}

impl PlanManager {
    /// Load the saved plan and credential, falling back to an empty plan
    pub fn restore(store: Box<dyn PersistenceStore>, generator: Arc<dyn GenerationService>) -> Self {
        let plan = match store.get(PLAN_KEY) {
            None => {
                debug!("No saved plan, starting empty");
                ProductPlan::new()
            }
            Some(blob) => match ProductPlan::from_json(&blob) {
                Ok(plan) => {
                    let (done, total) = plan.progress();
                    info!("Restored plan ({}/{} sections complete)", done, total);
                    plan
                }
                Err(e) => {
                    warn!("Failed to parse saved plan, starting empty: {}", e);
                    ProductPlan::new()
                }
            },
        };

        let credential = store
            .get(CREDENTIAL_KEY)
            .filter(|key| !key.trim().is_empty());

        Self {
            plan,
            suggestions: HashMap::new(),
            current_step: None,
            view: ViewMode::Editing,
            credential,
            canvas: None,
            error: None,
            canvas_error: None,
            settings_requested: false,
            store,
            generator,
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn plan(&self) -> &ProductPlan {
        &self.plan
    }

    pub fn section(&self, id: SectionId) -> &SectionData {
        self.plan.section(id)
    }

    /// Pending idea list for a section, if a generation produced one
    pub fn suggestions(&self, id: SectionId) -> Option<&[String]> {
        self.suggestions.get(&id).map(Vec::as_slice)
    }

    /// `None` until the wizard is started
    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    pub fn current_section(&self) -> Option<SectionId> {
        self.current_step.and_then(SectionId::from_index)
    }

    pub fn current_data(&self) -> Option<&SectionData> {
        self.current_section().map(|id| self.plan.section(id))
    }

    pub fn current_suggestions(&self) -> Option<&[String]> {
        self.current_section().and_then(|id| self.suggestions(id))
    }

    pub fn is_started(&self) -> bool {
        self.current_step.is_some()
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn is_viewing_plan(&self) -> bool {
        self.view == ViewMode::PlanReview
    }

    pub fn is_viewing_canvas(&self) -> bool {
        self.view == ViewMode::CanvasReview
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn canvas(&self) -> Option<&LeanCanvasData> {
        self.canvas.as_ref()
    }

    /// Last error from a step action
    pub fn error(&self) -> Option<&PlanError> {
        self.error.as_ref()
    }

    /// Last error from canvas generation
    pub fn canvas_error(&self) -> Option<&PlanError> {
        self.canvas_error.as_ref()
    }

    /// Set when an action needed a credential; cleared by
    /// [`dismiss_settings`](Self::dismiss_settings) or a saved credential
    pub fn settings_requested(&self) -> bool {
        self.settings_requested
    }

    /// (completed sections, total sections)
    pub fn progress(&self) -> (usize, usize) {
        self.plan.progress()
    }

    /// The plan as Markdown, stamped with the current time
    pub fn plan_markdown(&self) -> String {
        self.plan.to_markdown(Utc::now())
    }

    pub fn store(&self) -> &dyn PersistenceStore {
        self.store.as_ref()
    }

    // ------------------------------------------------------------------
    // Plan mutations
    // ------------------------------------------------------------------

    /// Replace the user's notes for one section
    pub fn update_user_input(&mut self, id: SectionId, text: impl Into<String>) {
        self.plan.section_mut(id).user_input = text.into();
        self.persist();
    }

    /// Run generation for a section
    ///
    /// - No credential, paid section: `CredentialRequired`, nothing is called
    /// - No credential, free section: example content, flagged as example
    /// - Credential, last section: whole-plan action items replace the content
    /// - Credential, any other section: requires notes, stores an idea list
    ///   and drops the example flag
    pub async fn generate(&mut self, id: SectionId) -> Result<(), PlanError> {
        let result = self.run_generation(id).await;
        if let Err(err) = &result {
            warn!("Generation for {} failed: {}", id, err);
            if err.needs_credential() {
                self.settings_requested = true;
            }
            self.error = Some(err.clone());
        }
        result
    }

    async fn run_generation(&mut self, id: SectionId) -> Result<(), PlanError> {
        let credential = match self.credential.clone() {
            Some(credential) => credential,
            None if id.is_free() => {
                self.error = None;
                let content = self
                    .generator
                    .example_content(id.title())
                    .await
                    .map_err(|e| PlanError::generation(&e))?;
                self.plan.section_mut(id).set_example(content);
                self.persist();
                return Ok(());
            }
            None => return Err(PlanError::CredentialRequired),
        };

        self.error = None;
        let user_input = self.plan.section(id).user_input.clone();

        if id.is_last() {
            let content = self
                .generator
                .action_items(&self.plan, &SectionId::ALL, &user_input, &credential)
                .await
                .map_err(|e| PlanError::generation(&e))?;
            self.plan.section_mut(id).replace_content(content);
            self.persist();
            return Ok(());
        }

        if user_input.trim().is_empty() {
            return Err(PlanError::MissingInput(id));
        }

        let ideas = self
            .generator
            .section_ideas(id.title(), &user_input, &credential)
            .await
            .map_err(|e| PlanError::generation(&e))?;
        debug!("Stored {} suggestions for {}", ideas.len(), id);
        self.suggestions.insert(id, ideas);

        // Real generation has run for this section; the example is no longer current
        let data = self.plan.section_mut(id);
        if data.is_example {
            data.is_example = false;
            self.persist();
        }
        Ok(())
    }

    /// Make `idea` the section's content and drop its pending ideas
    pub fn select_idea(&mut self, id: SectionId, idea: impl Into<String>) {
        self.plan.section_mut(id).replace_content(idea.into());
        self.suggestions.remove(&id);
        self.persist();
    }

    /// Restore history entry `index` (whose text is `version`) as the content
    ///
    /// The displaced content goes to the front of history. The restored
    /// version is never flagged as an example.
    pub fn revert_version(
        &mut self,
        id: SectionId,
        version: impl Into<String>,
        index: usize,
    ) -> Result<(), PlanError> {
        if !self.plan.section_mut(id).revert_to(index, version.into()) {
            warn!("Revert for {} ignored: no history entry {}", id, index);
            return Err(PlanError::InvalidVersion(index));
        }
        self.persist();
        Ok(())
    }

    /// Build the Lean Canvas from the whole plan and switch to canvas review
    pub async fn generate_canvas(&mut self) -> Result<(), PlanError> {
        let Some(credential) = self.credential.clone() else {
            self.settings_requested = true;
            self.canvas_error = Some(PlanError::CredentialRequired);
            return Err(PlanError::CredentialRequired);
        };

        self.canvas_error = None;
        match self
            .generator
            .canvas_summary(&self.plan, &SectionId::ALL, &credential)
            .await
        {
            Ok(canvas) => {
                info!("Lean Canvas generated");
                self.canvas = Some(canvas);
                self.view = ViewMode::CanvasReview;
                Ok(())
            }
            Err(e) => {
                let err = PlanError::canvas(&e);
                warn!("Canvas generation failed: {}", err);
                self.canvas_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Empty the plan and all transient state; the credential is kept
    pub fn reset(&mut self) {
        self.plan = ProductPlan::new();
        self.suggestions.clear();
        self.current_step = None;
        self.view = ViewMode::Editing;
        self.canvas = None;
        self.error = None;
        self.canvas_error = None;

        if let Err(e) = self.store.remove(PLAN_KEY) {
            warn!("Failed to remove saved plan: {}", e);
        }
        info!("Plan reset");
    }

    /// Store a credential; blank input is ignored and returns `false`
    pub fn save_credential(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }

        if let Err(e) = self.store.set(CREDENTIAL_KEY, value) {
            warn!("Failed to persist credential: {}", e);
        }
        self.credential = Some(value.to_string());
        self.error = None;
        self.canvas_error = None;
        self.settings_requested = false;
        info!("Credential saved");
        true
    }

    pub fn dismiss_settings(&mut self) {
        self.settings_requested = false;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Leave the landing page for the first step
    pub fn start(&mut self) {
        self.current_step = Some(0);
        self.view = ViewMode::Editing;
    }

    /// Next step; past the last one switches to plan review
    pub fn advance_step(&mut self) {
        let Some(step) = self.current_step else {
            return;
        };
        if step + 1 < SECTION_COUNT {
            self.current_step = Some(step + 1);
        } else {
            self.view = ViewMode::PlanReview;
        }
    }

    /// Previous step; no-op on the first one
    pub fn retreat_step(&mut self) {
        if let Some(step) = self.current_step {
            if step > 0 {
                self.current_step = Some(step - 1);
            }
        }
    }

    /// Jump straight to a step; out-of-range indexes are ignored
    pub fn select_step(&mut self, index: usize) {
        if index < SECTION_COUNT {
            self.current_step = Some(index);
            self.view = ViewMode::Editing;
        }
    }

    pub fn enter_plan_review(&mut self) {
        if self.current_step.is_none() {
            self.current_step = Some(SECTION_COUNT - 1);
        }
        self.view = ViewMode::PlanReview;
    }

    /// Back to editing, positioned on the last section
    pub fn enter_edit_mode(&mut self) {
        self.view = ViewMode::Editing;
        self.current_step = Some(SECTION_COUNT - 1);
    }

    /// From canvas review back to plan review
    pub fn exit_canvas_view(&mut self) {
        if self.view == ViewMode::CanvasReview {
            self.view = ViewMode::PlanReview;
        }
    }

    fn persist(&self) {
        match self.plan.to_json() {
            Ok(blob) => {
                if let Err(e) = self.store.set(PLAN_KEY, &blob) {
                    warn!("Failed to save plan: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize plan: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Records calls and answers from a script
    #[derive(Default)]
    struct FakeGenerator {
        calls: Mutex<Vec<&'static str>>,
        fail_with: Option<String>,
        ideas: Vec<String>,
    }

    impl FakeGenerator {
        fn ok() -> Self {
            Self {
                ideas: vec!["Idea A".into(), "Idea B".into(), "Idea C".into()],
                ..Default::default()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.into()),
                ..Default::default()
            }
        }

        fn check(&self, call: &'static str) -> Result<()> {
            self.calls.lock().push(call);
            match &self.fail_with {
                Some(message) => Err(anyhow!(message.clone())),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl GenerationService for FakeGenerator {
        async fn example_content(&self, section_title: &str) -> Result<String> {
            self.check("example")?;
            Ok(format!("Example for {}", section_title))
        }

        async fn section_ideas(&self, _: &str, _: &str, _: &str) -> Result<Vec<String>> {
            self.check("ideas")?;
            Ok(self.ideas.clone())
        }

        async fn action_items(
            &self,
            _: &ProductPlan,
            order: &[SectionId],
            notes: &str,
            _: &str,
        ) -> Result<String> {
            self.check("action_items")?;
            Ok(format!("{} steps; notes: {}", order.len(), notes))
        }

        async fn canvas_summary(
            &self,
            _: &ProductPlan,
            _: &[SectionId],
            _: &str,
        ) -> Result<LeanCanvasData> {
            self.check("canvas")?;
            Ok(LeanCanvasData {
                problem: "Late payments".into(),
                ..Default::default()
            })
        }
    }

    fn manager_with(generator: Arc<FakeGenerator>) -> PlanManager {
        PlanManager::restore(Box::new(MemoryStore::new()), generator)
    }

    fn manager_with_key(generator: Arc<FakeGenerator>) -> PlanManager {
        let mut manager = manager_with(generator);
        manager.save_credential("key-123");
        manager
    }

    fn assert_no_empty_history(manager: &PlanManager) {
        for (id, data) in manager.plan().iter() {
            assert!(
                data.history.iter().all(|entry| !entry.is_empty()),
                "empty history entry in {}",
                id
            );
        }
    }

    #[test]
    fn test_restore_empty_store() {
        let manager = manager_with(Arc::new(FakeGenerator::ok()));
        assert_eq!(manager.plan(), &ProductPlan::new());
        assert!(!manager.has_credential());
        assert_eq!(manager.current_step(), None);
        assert_eq!(manager.view(), ViewMode::Editing);
    }

    #[test]
    fn test_restore_malformed_blob_falls_back() {
        let store = MemoryStore::new();
        store.set(PLAN_KEY, "{not json").unwrap();
        store.set(CREDENTIAL_KEY, "abc").unwrap();

        let manager = PlanManager::restore(Box::new(store), Arc::new(FakeGenerator::ok()));
        assert_eq!(manager.plan(), &ProductPlan::new());
        assert_eq!(manager.credential(), Some("abc"));
    }

    #[test]
    fn test_restore_roundtrip() {
        let store = MemoryStore::new();
        let mut plan = ProductPlan::new();
        plan.section_mut(SectionId::Monetization).user_input = "subscriptions".into();
        store.set(PLAN_KEY, &plan.to_json().unwrap()).unwrap();

        let manager = PlanManager::restore(Box::new(store), Arc::new(FakeGenerator::ok()));
        assert_eq!(
            manager.section(SectionId::Monetization).user_input,
            "subscriptions"
        );
    }

    #[test]
    fn test_update_user_input_touches_only_input() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.select_idea(SectionId::KeyFeatures, "Existing");
        manager.update_user_input(SectionId::KeyFeatures, "new notes");

        let data = manager.section(SectionId::KeyFeatures);
        assert_eq!(data.user_input, "new notes");
        assert_eq!(data.generated_content, "Existing");
        assert!(data.history.is_empty());

        let saved = manager.store().get(PLAN_KEY).expect("plan persisted");
        assert!(saved.contains("new notes"));
    }

    #[tokio::test]
    async fn test_free_section_without_credential_gives_example() {
        let generator = Arc::new(FakeGenerator::ok());
        let mut manager = manager_with(generator.clone());
        manager.update_user_input(
            SectionId::ApplicationObjective,
            "Helps freelancers invoice clients",
        );

        manager
            .generate(SectionId::ApplicationObjective)
            .await
            .unwrap();

        let data = manager.section(SectionId::ApplicationObjective);
        assert!(data.is_example);
        assert!(!data.generated_content.is_empty());
        assert!(data.history.is_empty());
        assert_eq!(generator.calls(), vec!["example"]);
    }

    #[tokio::test]
    async fn test_paid_section_without_credential_never_calls_service() {
        let generator = Arc::new(FakeGenerator::ok());
        let mut manager = manager_with(generator.clone());
        manager.update_user_input(SectionId::Technology, "rust");

        let err = manager.generate(SectionId::Technology).await.unwrap_err();
        assert_eq!(err, PlanError::CredentialRequired);
        assert_eq!(manager.error(), Some(&PlanError::CredentialRequired));
        assert!(manager.settings_requested());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ideas_require_input() {
        let generator = Arc::new(FakeGenerator::ok());
        let mut manager = manager_with_key(generator.clone());

        let err = manager.generate(SectionId::KeyFeatures).await.unwrap_err();
        assert_eq!(err, PlanError::MissingInput(SectionId::KeyFeatures));
        assert!(generator.calls().is_empty());
        assert!(manager.suggestions(SectionId::KeyFeatures).is_none());
    }

    #[tokio::test]
    async fn test_ideas_stored_without_touching_content() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.update_user_input(SectionId::UserIdentification, "freelancers");

        manager.generate(SectionId::UserIdentification).await.unwrap();

        assert_eq!(
            manager.suggestions(SectionId::UserIdentification).unwrap().len(),
            3
        );
        assert!(manager
            .section(SectionId::UserIdentification)
            .generated_content
            .is_empty());
        assert!(manager.error().is_none());
    }

    #[tokio::test]
    async fn test_select_idea_clears_only_that_section() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.update_user_input(SectionId::KeyFeatures, "a");
        manager.update_user_input(SectionId::UserJourney, "b");
        manager.generate(SectionId::KeyFeatures).await.unwrap();
        manager.generate(SectionId::UserJourney).await.unwrap();

        manager.select_idea(SectionId::KeyFeatures, "Idea B");

        assert!(manager.suggestions(SectionId::KeyFeatures).is_none());
        assert!(manager.suggestions(SectionId::UserJourney).is_some());
        let data = manager.section(SectionId::KeyFeatures);
        assert_eq!(data.generated_content, "Idea B");
        assert!(!data.is_example);
    }

    #[test]
    fn test_select_idea_pushes_history() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.select_idea(SectionId::UiDesign, "Draft A");
        manager.select_idea(SectionId::UiDesign, "Draft B");

        let data = manager.section(SectionId::UiDesign);
        assert_eq!(data.generated_content, "Draft B");
        assert_eq!(data.history, vec!["Draft A".to_string()]);
    }

    #[tokio::test]
    async fn test_example_then_real_generation_clears_flag() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.generate(SectionId::UserIdentification).await.unwrap();
        assert!(manager.section(SectionId::UserIdentification).is_example);

        manager.save_credential("key");
        manager.update_user_input(SectionId::UserIdentification, "notes");
        manager.generate(SectionId::UserIdentification).await.unwrap();
        assert!(!manager.section(SectionId::UserIdentification).is_example);
        manager.select_idea(SectionId::UserIdentification, "Idea A");

        let data = manager.section(SectionId::UserIdentification);
        assert!(!data.is_example);
        assert_eq!(data.history.len(), 1);
    }

    #[tokio::test]
    async fn test_action_items_use_whole_plan_and_push_history() {
        let generator = Arc::new(FakeGenerator::ok());
        let mut manager = manager_with_key(generator.clone());
        manager.update_user_input(SectionId::ActionItems, "ship fast");

        manager.generate(SectionId::ActionItems).await.unwrap();
        let first = manager.section(SectionId::ActionItems).generated_content.clone();
        assert_eq!(first, "11 steps; notes: ship fast");

        manager.generate(SectionId::ActionItems).await.unwrap();
        let data = manager.section(SectionId::ActionItems);
        assert_eq!(data.history, vec![first]);
        assert!(!data.is_example);
        assert_eq!(generator.calls(), vec!["action_items", "action_items"]);
    }

    #[tokio::test]
    async fn test_action_items_need_no_input() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.generate(SectionId::ActionItems).await.unwrap();
        assert!(manager.section(SectionId::ActionItems).is_complete());
    }

    #[tokio::test]
    async fn test_generation_failure_is_recorded() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::failing("quota exceeded")));
        manager.update_user_input(SectionId::KeyFeatures, "x");

        let err = manager.generate(SectionId::KeyFeatures).await.unwrap_err();
        assert_eq!(err, PlanError::GenerationFailed("quota exceeded".into()));
        assert_eq!(manager.error(), Some(&err));
        assert!(manager.canvas_error().is_none());
        assert!(!manager.settings_requested());
    }

    #[test]
    fn test_revert_is_inverse_of_replace() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.select_idea(SectionId::SuccessMetrics, "C0");
        manager.select_idea(SectionId::SuccessMetrics, "C1");
        manager.select_idea(SectionId::SuccessMetrics, "C2");
        assert_eq!(
            manager.section(SectionId::SuccessMetrics).history,
            vec!["C1".to_string(), "C0".to_string()]
        );

        manager
            .revert_version(SectionId::SuccessMetrics, "C1", 0)
            .unwrap();

        let data = manager.section(SectionId::SuccessMetrics);
        assert_eq!(data.generated_content, "C1");
        assert_eq!(data.history, vec!["C2".to_string(), "C0".to_string()]);
        assert!(!data.is_example);
    }

    #[test]
    fn test_revert_invalid_index() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.select_idea(SectionId::SuccessMetrics, "only");

        let err = manager
            .revert_version(SectionId::SuccessMetrics, "ghost", 0)
            .unwrap_err();
        assert_eq!(err, PlanError::InvalidVersion(0));
        assert_eq!(
            manager.section(SectionId::SuccessMetrics).generated_content,
            "only"
        );
    }

    #[tokio::test]
    async fn test_history_never_has_empty_entries() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.select_idea(SectionId::Technology, "");
        manager.select_idea(SectionId::Technology, "A");
        manager.select_idea(SectionId::Technology, "");
        manager.select_idea(SectionId::Technology, "B");
        manager.revert_version(SectionId::Technology, "A", 0).unwrap();
        manager.generate(SectionId::ActionItems).await.unwrap();
        manager.generate(SectionId::ActionItems).await.unwrap();

        assert_no_empty_history(&manager);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.advance_step();
        assert_eq!(manager.current_step(), None);

        manager.start();
        manager.retreat_step();
        assert_eq!(manager.current_step(), Some(0));

        manager.advance_step();
        assert_eq!(manager.current_section(), Some(SectionId::ApplicationObjective));
        assert_eq!(manager.current_data(), Some(&SectionData::default()));
        assert!(manager.current_suggestions().is_none());

        manager.select_step(10);
        manager.advance_step();
        assert!(manager.is_viewing_plan());
        assert_eq!(manager.current_step(), Some(10));

        manager.select_step(42);
        assert!(manager.is_viewing_plan());
    }

    #[test]
    fn test_edit_mode_returns_to_last_step() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        manager.start();
        manager.enter_plan_review();
        assert!(manager.is_viewing_plan());

        manager.enter_edit_mode();
        assert_eq!(manager.view(), ViewMode::Editing);
        assert_eq!(manager.current_step(), Some(SECTION_COUNT - 1));
    }

    #[tokio::test]
    async fn test_canvas_requires_credential() {
        let generator = Arc::new(FakeGenerator::ok());
        let mut manager = manager_with(generator.clone());
        manager.start();
        manager.enter_plan_review();

        let err = manager.generate_canvas().await.unwrap_err();
        assert_eq!(err, PlanError::CredentialRequired);
        assert!(!manager.is_viewing_canvas());
        assert!(manager.canvas().is_none());
        assert!(manager.settings_requested());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_canvas_success_and_exit() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.start();
        manager.enter_plan_review();

        manager.generate_canvas().await.unwrap();
        assert!(manager.is_viewing_canvas());
        assert_eq!(manager.canvas().unwrap().problem, "Late payments");

        manager.exit_canvas_view();
        assert!(manager.is_viewing_plan());
    }

    #[tokio::test]
    async fn test_canvas_failure_keeps_previous_canvas() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.generate_canvas().await.unwrap();
        manager.exit_canvas_view();

        manager.generator = Arc::new(FakeGenerator::failing("overloaded"));
        let err = manager.generate_canvas().await.unwrap_err();

        assert_eq!(err, PlanError::CanvasGenerationFailed("overloaded".into()));
        assert_eq!(manager.canvas_error(), Some(&err));
        assert!(manager.error().is_none());
        assert_eq!(manager.canvas().unwrap().problem, "Late payments");
        assert!(manager.is_viewing_plan());
    }

    #[tokio::test]
    async fn test_reset_keeps_credential() {
        let mut manager = manager_with_key(Arc::new(FakeGenerator::ok()));
        manager.start();
        manager.update_user_input(SectionId::KeyFeatures, "x");
        manager.generate(SectionId::KeyFeatures).await.unwrap();
        manager.select_idea(SectionId::Technology, "A");
        manager.select_idea(SectionId::Technology, "B");
        manager.generate_canvas().await.unwrap();

        manager.reset();

        for (_, data) in manager.plan().iter() {
            assert_eq!(data, &SectionData::default());
        }
        assert_eq!(manager.plan().iter().count(), SECTION_COUNT);
        assert!(manager.canvas().is_none());
        assert!(manager.suggestions(SectionId::KeyFeatures).is_none());
        assert_eq!(manager.current_step(), None);
        assert_eq!(manager.view(), ViewMode::Editing);
        assert_eq!(manager.credential(), Some("key-123"));
        assert!(manager.store().get(PLAN_KEY).is_none());
        assert_eq!(manager.store().get(CREDENTIAL_KEY).as_deref(), Some("key-123"));
    }

    #[test]
    fn test_blank_credential_is_ignored() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        assert!(!manager.save_credential("   "));
        assert!(!manager.has_credential());
        assert!(manager.store().get(CREDENTIAL_KEY).is_none());
    }

    #[tokio::test]
    async fn test_saving_credential_clears_errors() {
        let mut manager = manager_with(Arc::new(FakeGenerator::ok()));
        let _ = manager.generate(SectionId::Technology).await;
        let _ = manager.generate_canvas().await;
        assert!(manager.error().is_some());
        assert!(manager.canvas_error().is_some());

        assert!(manager.save_credential(" key "));
        assert_eq!(manager.credential(), Some("key"));
        assert!(manager.error().is_none());
        assert!(manager.canvas_error().is_none());
        assert!(!manager.settings_requested());
    }
}
