//! Text normalization applied before classification.
//!
//! Comments are split on whitespace, slang ("teencode") tokens are replaced
//! from a [`SlangDictionary`], and the result is folded to lowercase.
//!
//! ```rust
//! use comment_sentiment::normalization::{NormalizationConfig, SlangDictionary, TextNormalizer};
//!
//! # fn main() -> comment_sentiment::error::Result<()> {
//! let rows: &[u8] = "ko\tkhông\nthik\tthích\n".as_bytes();
//! let normalizer = TextNormalizer::new(
//!     SlangDictionary::from_reader(rows)?,
//!     NormalizationConfig::default(),
//! );
//!
//! assert_eq!(normalizer.normalize("ko   thik QUÁ"), "không thích quá");
//! # Ok(())
//! # }
//! ```

pub(crate) mod normalizer;
pub(crate) mod slang;

pub use normalizer::{normalize, NormalizationConfig, TextNormalizer};
pub use slang::SlangDictionary;
