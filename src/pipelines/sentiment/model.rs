use std::sync::Arc;

use crate::error::Result;

/// A model that scores normalized text against the three sentiment classes.
///
/// Implementations return the index of the highest-scoring class. Ties are the
/// model's own business. The same input is expected to give the same index on
/// every call; text beyond the model's token budget is truncated silently.
pub trait SentimentClassifier: Send + Sync {
    /// Predict the class index for already-normalized text.
    fn predict(&self, normalized: &str) -> Result<u32>;
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Arc<T> {
    fn predict(&self, normalized: &str) -> Result<u32> {
        (**self).predict(normalized)
    }
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Box<T> {
    fn predict(&self, normalized: &str) -> Result<u32> {
        (**self).predict(normalized)
    }
}
