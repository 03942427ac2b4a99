use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::modernbert::{
    ClassifierConfig, Config,
    ModernBertForSequenceClassification as CandleModernBertForSequenceClassification,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{info, warn};

use crate::error::{PipelineError, Result};
use crate::loaders::ModelSource;
use crate::pipelines::sentiment::label::SentimentLabel;
use crate::pipelines::sentiment::model::SentimentClassifier;

/// Token budget per comment. Longer input is truncated silently.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// ModernBERT sequence classifier with its tokenizer.
#[derive(Clone)]
pub struct ModernBertClassifier {
    model: CandleModernBertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    id2label: HashMap<String, String>,
}

impl ModernBertClassifier {
    /// Load weights, config and tokenizer from `source` onto `device`.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Startup`] if any file is missing or malformed, or the
    /// config declares no classification labels.
    pub fn load(source: &ModelSource, device: Device, max_length: usize) -> Result<Self> {
        let files = source.resolve()?;

        let config_str = std::fs::read_to_string(&files.config)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_str)?;

        let id2label = class_cfg.id2label()?;
        check_label_table(&id2label);
        patch_classifier_config(&mut config, &id2label);

        let vb = if files
            .weights
            .extension()
            .is_some_and(|e| e == "safetensors")
        {
            unsafe {
                VarBuilder::from_mmaped_safetensors(&[&files.weights], DType::F32, &device)
                    .map_err(startup(&files.weights))?
            }
        } else {
            VarBuilder::from_pth(&files.weights, DType::F32, &device)
                .map_err(startup(&files.weights))?
        };
        let model = CandleModernBertForSequenceClassification::load(vb, &config)
            .map_err(startup(&files.weights))?;

        let tokenizer = load_tokenizer(&files.tokenizer, max_length)?;

        info!(
            source = %source,
            device = ?device.location(),
            num_labels = id2label.len(),
            max_length,
            "loaded ModernBERT classifier"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            id2label,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Label names as declared by the model's `config.json`.
    pub fn id2label(&self) -> &HashMap<String, String> {
        &self.id2label
    }
}

impl SentimentClassifier for ModernBertClassifier {
    fn predict(&self, normalized: &str) -> Result<u32> {
        let tokens = self.tokenizer.encode(normalized, true).map_err(|e| {
            PipelineError::Classifier(format!(
                "Tokenization failed on '{}': {}",
                &normalized.chars().take(50).collect::<String>(),
                e
            ))
        })?;

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;

        Ok(pred_id)
    }
}

fn startup(path: &Path) -> impl FnOnce(candle_core::Error) -> PipelineError + '_ {
    move |e| {
        PipelineError::Startup(format!(
            "Failed to load model weights from '{}': {}",
            path.display(),
            e
        ))
    }
}

fn load_tokenizer(path: &Path, max_length: usize) -> Result<Tokenizer> {
    let mut tokenizer = Tokenizer::from_file(path).map_err(|e| {
        PipelineError::Startup(format!(
            "Failed to load tokenizer from '{}': {}",
            path.display(),
            e
        ))
    })?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| {
            PipelineError::Startup(format!("Invalid truncation length {max_length}: {e}"))
        })?;

    Ok(tokenizer)
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

impl ClassifierConfigJson {
    /// Class names keyed by index, falling back to `label2id` and then to
    /// `label_{i}` placeholders.
    fn id2label(&self) -> Result<HashMap<String, String>> {
        let num_labels = self.label2id.len().max(self.id2label.len());
        if num_labels == 0 {
            return Err(PipelineError::Startup(
                "Model config declares no labels (id2label/label2id); not a classification model"
                    .into(),
            ));
        }

        if !self.id2label.is_empty() {
            return Ok(self.id2label.clone());
        }

        let mut id2label: HashMap<String, String> = (0..num_labels)
            .map(|i| (i.to_string(), format!("label_{i}")))
            .collect();
        for (name, id) in &self.label2id {
            id2label.insert(id.to_string(), name.clone());
        }
        Ok(id2label)
    }
}

/// Warn when the model's own label names disagree with the fixed label table.
fn check_label_table(id2label: &HashMap<String, String>) {
    if id2label.len() != SentimentLabel::ALL.len() {
        warn!(
            num_labels = id2label.len(),
            "model does not have exactly three classes; indices above 2 will be rejected"
        );
    }

    for label in SentimentLabel::ALL {
        let declared = id2label.get(&label.index().to_string());
        let matches = declared.is_some_and(|name| {
            name.eq_ignore_ascii_case(label.as_str()) || name.starts_with("label_")
        });
        if !matches {
            warn!(
                index = label.index(),
                expected = label.as_str(),
                declared = ?declared,
                "model label name differs from label table"
            );
        }
    }
}

fn patch_classifier_config(config: &mut Config, id2label: &HashMap<String, String>) {
    let needs_patch = config
        .classifier_config
        .as_ref()
        .map(|c| c.id2label.len())
        .unwrap_or(0)
        != id2label.len();

    if needs_patch {
        let classifier_pooling = config
            .classifier_config
            .as_ref()
            .map(|c| c.classifier_pooling.clone())
            .unwrap_or_default();
        let label2id: HashMap<String, String> = id2label
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect();

        config.classifier_config = Some(ClassifierConfig {
            id2label: id2label.clone(),
            label2id,
            classifier_pooling,
        });
    }
}
