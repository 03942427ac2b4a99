//! Comment sentiment classification.
//!
//! Classify a comment as `Negative`, `Neutral` or `Positive`. Input is
//! normalized (slang replaced, lowercased) before it reaches the model, and the
//! model's class index is mapped through a fixed label table.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use comment_sentiment::normalization::SlangDictionary;
//! use comment_sentiment::sentiment::ClassificationPipelineBuilder;
//!
//! # fn main() -> comment_sentiment::error::Result<()> {
//! let pipeline = ClassificationPipelineBuilder::modernbert("models/sentiment")
//!     .dictionary(SlangDictionary::from_path("data/teencode.txt")?)
//!     .build()?;
//!
//! let label = pipeline.classify("sp dùng ok lắm")?;
//! println!("sentiment: {label}");
//! # Ok(())
//! # }
//! ```
//!
//! # Custom classifiers
//!
//! [`ClassificationPipeline::new`] takes any [`SentimentClassifier`], which is
//! how tests swap the model for a stub.

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod label;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::loaders::ModelSource;
pub use crate::models::{ModernBertClassifier, DEFAULT_MAX_LENGTH};
pub use crate::pipelines::stats::PipelineStats;
pub use crate::pipelines::utils::DeviceRequest;
pub use builder::ClassificationPipelineBuilder;
pub use label::{label_for, SentimentLabel};
pub use model::SentimentClassifier;
pub use pipeline::{ClassificationPipeline, Output};
