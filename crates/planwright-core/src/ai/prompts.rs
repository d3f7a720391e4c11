//! Prompt text and response schemas for each generation call

use serde_json::Value;

use crate::plan::{LeanCanvasBlock, ProductPlan, SectionId};

/// Shared persona for every call
pub const PLANNER_SYSTEM_PROMPT: &str = "\
You are an experienced product strategist helping a founder draft a product plan.

Rules:
- Be concrete and specific to the founder's idea
- Prefer short paragraphs and bullet lists
- No preamble, no sign-off, no markdown headings
- Never invent facts about the founder's company";

/// User message asking for alternative drafts of one section
pub fn section_ideas(section_title: &str, user_input: &str, count: usize) -> String {
    format!(
        "Plan section: {title}\n\n\
         The founder's notes for this section:\n{input}\n\n\
         Write {count} distinct, alternative drafts for this section based on the notes. \
         Each draft should be complete on its own (2-6 sentences or a short bullet list). \
         Respond with a JSON array of {count} strings.",
        title = section_title,
        input = user_input.trim(),
        count = count,
    )
}

/// Schema for [`section_ideas`]
pub fn ideas_schema() -> Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {"type": "STRING"}
    })
}

/// User message for the next-steps section
pub fn action_items(plan: &ProductPlan, order: &[SectionId], notes: &str) -> String {
    let context_order: Vec<SectionId> = order
        .iter()
        .copied()
        .filter(|id| !id.is_last())
        .collect();

    let mut prompt = String::from("## PRODUCT PLAN\n\n");
    prompt.push_str(&plan.to_context(&context_order));

    if !notes.trim().is_empty() {
        prompt.push_str("## FOUNDER'S NOTES FOR NEXT STEPS\n\n");
        prompt.push_str(notes.trim());
        prompt.push_str("\n\n");
    }

    prompt.push_str(
        "Based on the whole plan above, write a prioritized checklist of actionable next steps. \
         Group them by phase (e.g. Validation, MVP build, Launch). \
         Use markdown checkboxes (\"- [ ] ...\") for each step.",
    );
    prompt
}

/// User message for the canvas summary
pub fn canvas_summary(plan: &ProductPlan, order: &[SectionId]) -> String {
    let mut prompt = String::from("## PRODUCT PLAN\n\n");
    prompt.push_str(&plan.to_context(order));
    prompt.push_str(
        "Summarize the plan above as a Lean Canvas. Fill every one of the nine blocks \
         with 1-3 concise sentences or bullet points. If the plan is silent on a block, \
         infer a reasonable answer from the rest of the plan.",
    );
    prompt
}

/// Schema for [`canvas_summary`]: an object with all nine blocks required
pub fn canvas_schema() -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();
    for block in LeanCanvasBlock::ALL {
        properties.insert(
            block.as_str().to_string(),
            serde_json::json!({"type": "STRING"}),
        );
        required.push(Value::from(block.as_str()));
    }
    serde_json::json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}
