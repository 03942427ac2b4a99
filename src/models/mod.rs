// ============ Model implementations ============

pub(crate) mod modernbert;

pub use modernbert::{ModernBertClassifier, DEFAULT_MAX_LENGTH};
