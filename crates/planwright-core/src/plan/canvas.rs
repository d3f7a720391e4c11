//! Lean Canvas summary derived from a finished plan

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine Lean Canvas blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeanCanvasBlock {
    Problem,
    Solution,
    KeyMetrics,
    UniqueValueProposition,
    UnfairAdvantage,
    Channels,
    CustomerSegments,
    CostStructure,
    RevenueStreams,
}

impl LeanCanvasBlock {
    pub const ALL: [LeanCanvasBlock; 9] = [
        LeanCanvasBlock::Problem,
        LeanCanvasBlock::Solution,
        LeanCanvasBlock::KeyMetrics,
        LeanCanvasBlock::UniqueValueProposition,
        LeanCanvasBlock::UnfairAdvantage,
        LeanCanvasBlock::Channels,
        LeanCanvasBlock::CustomerSegments,
        LeanCanvasBlock::CostStructure,
        LeanCanvasBlock::RevenueStreams,
    ];

    /// JSON key
    pub fn as_str(self) -> &'static str {
        match self {
            LeanCanvasBlock::Problem => "problem",
            LeanCanvasBlock::Solution => "solution",
            LeanCanvasBlock::KeyMetrics => "keyMetrics",
            LeanCanvasBlock::UniqueValueProposition => "uniqueValueProposition",
            LeanCanvasBlock::UnfairAdvantage => "unfairAdvantage",
            LeanCanvasBlock::Channels => "channels",
            LeanCanvasBlock::CustomerSegments => "customerSegments",
            LeanCanvasBlock::CostStructure => "costStructure",
            LeanCanvasBlock::RevenueStreams => "revenueStreams",
        }
    }
}

impl fmt::Display for LeanCanvasBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeanCanvasBlock::Problem => "Problem",
            LeanCanvasBlock::Solution => "Solution",
            LeanCanvasBlock::KeyMetrics => "Key Metrics",
            LeanCanvasBlock::UniqueValueProposition => "Unique Value Proposition",
            LeanCanvasBlock::UnfairAdvantage => "Unfair Advantage",
            LeanCanvasBlock::Channels => "Channels",
            LeanCanvasBlock::CustomerSegments => "Customer Segments",
            LeanCanvasBlock::CostStructure => "Cost Structure",
            LeanCanvasBlock::RevenueStreams => "Revenue Streams",
        };
        write!(f, "{}", label)
    }
}

/// A full canvas; deserialization fails unless all nine blocks are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeanCanvasData {
    pub problem: String,
    pub solution: String,
    pub key_metrics: String,
    pub unique_value_proposition: String,
    pub unfair_advantage: String,
    pub channels: String,
    pub customer_segments: String,
    pub cost_structure: String,
    pub revenue_streams: String,
}

impl LeanCanvasData {
    pub fn block(&self, block: LeanCanvasBlock) -> &str {
        match block {
            LeanCanvasBlock::Problem => &self.problem,
            LeanCanvasBlock::Solution => &self.solution,
            LeanCanvasBlock::KeyMetrics => &self.key_metrics,
            LeanCanvasBlock::UniqueValueProposition => &self.unique_value_proposition,
            LeanCanvasBlock::UnfairAdvantage => &self.unfair_advantage,
            LeanCanvasBlock::Channels => &self.channels,
            LeanCanvasBlock::CustomerSegments => &self.customer_segments,
            LeanCanvasBlock::CostStructure => &self.cost_structure,
            LeanCanvasBlock::RevenueStreams => &self.revenue_streams,
        }
    }

    /// Blocks paired with their text, in canvas order
    pub fn blocks(&self) -> impl Iterator<Item = (LeanCanvasBlock, &str)> + '_ {
        LeanCanvasBlock::ALL
            .into_iter()
            .map(move |block| (block, self.block(block)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_keys_match_serde() {
        let value = serde_json::to_value(LeanCanvasData::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        for block in LeanCanvasBlock::ALL {
            assert!(object.contains_key(block.as_str()), "missing {}", block);
        }
    }

    #[test]
    fn test_missing_block_is_rejected() {
        let json = r#"{"problem":"p","solution":"s"}"#;
        assert!(serde_json::from_str::<LeanCanvasData>(json).is_err());
    }

    #[test]
    fn test_block_lookup() {
        let canvas = LeanCanvasData {
            channels: "SEO".into(),
            ..Default::default()
        };
        assert_eq!(canvas.block(LeanCanvasBlock::Channels), "SEO");
        assert_eq!(canvas.blocks().count(), 9);
    }
}
