use tracing::info;

use super::pipeline::ClassificationPipeline;
use crate::error::Result;
use crate::loaders::ModelSource;
use crate::models::{ModernBertClassifier, DEFAULT_MAX_LENGTH};
use crate::normalization::{NormalizationConfig, SlangDictionary, TextNormalizer};
use crate::pipelines::utils::DeviceRequest;

/// Builder for creating [`ClassificationPipeline`] instances.
///
/// Use [`Self::modernbert`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use comment_sentiment::normalization::SlangDictionary;
/// # use comment_sentiment::sentiment::ClassificationPipelineBuilder;
/// # fn main() -> comment_sentiment::error::Result<()> {
/// let pipeline = ClassificationPipelineBuilder::modernbert("models/sentiment")
///     .dictionary(SlangDictionary::from_path("data/teencode.txt")?)
///     .cuda(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClassificationPipelineBuilder {
    source: ModelSource,
    dictionary: SlangDictionary,
    normalization: NormalizationConfig,
    device_request: DeviceRequest,
    max_length: usize,
}

impl ClassificationPipelineBuilder {
    /// Creates a builder for a ModernBERT sequence-classification model.
    pub fn modernbert(source: impl Into<ModelSource>) -> Self {
        Self {
            source: source.into(),
            dictionary: SlangDictionary::default(),
            normalization: NormalizationConfig::default(),
            device_request: DeviceRequest::Cpu,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Slang dictionary used during normalization (empty by default).
    pub fn dictionary(mut self, dictionary: SlangDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn normalization(mut self, config: NormalizationConfig) -> Self {
        self.normalization = config;
        self
    }

    /// Token budget per comment (default 256). Longer input is truncated.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn device(mut self, request: DeviceRequest) -> Self {
        self.device_request = request;
        self
    }

    /// Use CPU for inference (default).
    pub fn cpu(self) -> Self {
        self.device(DeviceRequest::Cpu)
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(self, index: usize) -> Self {
        self.device(DeviceRequest::Cuda(index))
    }

    /// Loads the model and assembles the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Startup`](crate::error::PipelineError::Startup)
    /// if device initialization or model loading fails.
    pub fn build(self) -> Result<ClassificationPipeline<ModernBertClassifier>> {
        let device = self.device_request.resolve()?;
        info!(
            source = %self.source,
            device = %self.device_request,
            slang_entries = self.dictionary.len(),
            "building classification pipeline"
        );

        let model = ModernBertClassifier::load(&self.source, device, self.max_length)?;
        let normalizer = TextNormalizer::new(self.dictionary, self.normalization);

        Ok(ClassificationPipeline::new(normalizer, model))
    }
}
