//! Sentiment classification for short, slang-heavy comments.
//!
//! Powered by [Candle](https://github.com/huggingface/candle). A comment is
//! normalized (slang replaced, lowercased), scored by a pretrained
//! sequence-classification model, and mapped to `Negative`, `Neutral` or
//! `Positive`. The [`server`] module exposes this over HTTP.

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod server;

pub use pipelines::{normalization, sentiment};
