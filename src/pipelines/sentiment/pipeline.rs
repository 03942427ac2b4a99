use tracing::{debug, error};

use super::label::{label_for, SentimentLabel};
use super::model::SentimentClassifier;
use crate::error::{PipelineError, Result};
use crate::normalization::TextNormalizer;
use crate::pipelines::stats::PipelineStats;

/// Result of one [`ClassificationPipeline::run`].
#[derive(Debug, Clone)]
pub struct Output {
    /// Predicted sentiment.
    pub label: SentimentLabel,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Normalizes a comment, classifies it and maps the class index to a label.
///
/// Built once at startup and shared read-only between requests.
///
/// # Examples
///
/// ```rust
/// use comment_sentiment::error::Result;
/// use comment_sentiment::normalization::{NormalizationConfig, SlangDictionary, TextNormalizer};
/// use comment_sentiment::sentiment::{ClassificationPipeline, SentimentClassifier, SentimentLabel};
///
/// struct AlwaysPositive;
///
/// impl SentimentClassifier for AlwaysPositive {
///     fn predict(&self, _normalized: &str) -> Result<u32> {
///         Ok(2)
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let dictionary: SlangDictionary = [("dc", "được")].into_iter().collect();
/// let normalizer = TextNormalizer::new(dictionary, NormalizationConfig::default());
/// let pipeline = ClassificationPipeline::new(normalizer, AlwaysPositive);
///
/// assert_eq!(pipeline.classify("Sản phẩm dc lắm")?, SentimentLabel::Positive);
/// # Ok(())
/// # }
/// ```
pub struct ClassificationPipeline<M: SentimentClassifier> {
    pub(crate) normalizer: TextNormalizer,
    pub(crate) model: M,
}

impl<M: SentimentClassifier> ClassificationPipeline<M> {
    pub fn new(normalizer: TextNormalizer, model: M) -> Self {
        Self { normalizer, model }
    }

    /// Classify a raw comment.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::EmptyInput`] if `raw` is empty or whitespace only.
    /// - [`PipelineError::Classifier`] if the model fails.
    /// - [`PipelineError::OutOfRangeLabel`] if the model returns an unknown class.
    pub fn classify(&self, raw: &str) -> Result<SentimentLabel> {
        Ok(self.run(raw)?.label)
    }

    /// Like [`classify`](Self::classify), with timing.
    pub fn run(&self, raw: &str) -> Result<Output> {
        if raw.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let stats = PipelineStats::start();

        let normalized = self.normalizer.normalize(raw);
        let index = self.model.predict(&normalized)?;
        let label = label_for(index).inspect_err(|_| {
            error!(
                index,
                "classifier returned a class index outside the label table; \
                 model and label set do not match"
            );
        })?;

        let stats = stats.finish();
        debug!(
            %label,
            chars = normalized.chars().count(),
            elapsed_ms = stats.total_time.as_secs_f64() * 1000.0,
            "classified comment"
        );

        Ok(Output { label, stats })
    }

    /// The normalizer applied to every input.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The underlying classifier.
    pub fn model(&self) -> &M {
        &self.model
    }
}
