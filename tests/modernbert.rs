#![cfg(feature = "cuda")]

use comment_sentiment::error::Result;
use comment_sentiment::normalization::SlangDictionary;
use comment_sentiment::sentiment::{ClassificationPipelineBuilder, SentimentLabel};

const DEFAULT_MODEL: &str = "clapAI/modernBERT-base-multilingual-sentiment";

fn model_path() -> String {
    std::env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

#[test]
fn classifies_vietnamese_comments() -> Result<()> {
    let dictionary: SlangDictionary = [("ko", "không"), ("dc", "được")].into_iter().collect();
    let pipeline = ClassificationPipelineBuilder::modernbert(model_path().as_str())
        .dictionary(dictionary)
        .cuda(0)
        .build()?;

    let label = pipeline.classify("Sản phẩm rất tốt, giao hàng nhanh, tôi rất hài lòng!")?;
    assert_eq!(label, SentimentLabel::Positive);

    let label = pipeline.classify("Hàng tệ quá, ko dùng dc, rất thất vọng")?;
    assert_eq!(label, SentimentLabel::Negative);
    Ok(())
}

#[test]
fn long_input_is_truncated_not_rejected() -> Result<()> {
    let pipeline = ClassificationPipelineBuilder::modernbert(model_path().as_str())
        .cuda(0)
        .max_length(32)
        .build()?;

    let long = "rất tốt ".repeat(500);
    let first = pipeline.classify(&long)?;
    let second = pipeline.classify(&long)?;

    assert_eq!(first, second);
    Ok(())
}
