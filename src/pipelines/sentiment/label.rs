use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Sentiment category of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Class index 0.
    Negative,
    /// Class index 1.
    Neutral,
    /// Class index 2.
    Positive,
}

impl SentimentLabel {
    /// Every label, ordered by class index.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    /// The classifier's class index for this label.
    pub fn index(self) -> u32 {
        match self {
            SentimentLabel::Negative => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Positive => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for SentimentLabel {
    type Error = PipelineError;

    fn try_from(index: u32) -> Result<Self> {
        label_for(index)
    }
}

/// Map a classifier class index to its label.
///
/// # Errors
///
/// [`PipelineError::OutOfRangeLabel`] for any index other than 0, 1 or 2. This
/// means the model and the label table disagree; it is never coerced to a
/// default label.
pub fn label_for(index: u32) -> Result<SentimentLabel> {
    SentimentLabel::ALL
        .get(index as usize)
        .copied()
        .ok_or(PipelineError::OutOfRangeLabel(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fixed_indices() {
        assert_eq!(label_for(0).unwrap(), SentimentLabel::Negative);
        assert_eq!(label_for(1).unwrap(), SentimentLabel::Neutral);
        assert_eq!(label_for(2).unwrap(), SentimentLabel::Positive);
    }

    #[test]
    fn rejects_other_indices() {
        assert!(matches!(label_for(3), Err(PipelineError::OutOfRangeLabel(3))));
        assert!(matches!(
            label_for(u32::MAX),
            Err(PipelineError::OutOfRangeLabel(u32::MAX))
        ));
    }

    #[test]
    fn index_inverts_label_for() {
        for label in SentimentLabel::ALL {
            assert_eq!(label_for(label.index()).unwrap(), label);
        }
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"Positive\"");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }
}
