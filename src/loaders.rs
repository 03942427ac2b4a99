use std::path::{Path, PathBuf};

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tracing::info;

use crate::error::{PipelineError, Result};

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHT_FILES: [&str; 2] = ["model.safetensors", "pytorch_model.bin"];

/// Where a pretrained classifier and its tokenizer live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A directory holding `config.json`, the weights and `tokenizer.json`.
    Local(PathBuf),
    /// A Hugging Face Hub model repo id, e.g. `org/model`.
    Hub(String),
}

impl ModelSource {
    /// An existing directory, or anything shaped like a filesystem path
    /// (leading `/`, `.` or `~`, or more than one `/`), is
    /// [`ModelSource::Local`]. Anything else is a Hub repo id (`org/model`).
    pub fn parse(locator: &str) -> Self {
        let path = Path::new(locator);
        let path_like =
            locator.starts_with(&['/', '.', '~'][..]) || locator.matches('/').count() > 1;
        if path_like || path.is_dir() {
            ModelSource::Local(path.to_path_buf())
        } else {
            ModelSource::Hub(locator.to_string())
        }
    }

    pub(crate) fn resolve(&self) -> Result<ModelFiles> {
        let files = match self {
            ModelSource::Local(dir) if !dir.is_dir() => {
                return Err(PipelineError::Startup(format!(
                    "Model directory '{}' not found",
                    dir.display()
                )));
            }
            ModelSource::Local(dir) => ModelFiles {
                config: local_file(dir, CONFIG_FILE)?,
                weights: WEIGHT_FILES
                    .iter()
                    .map(|name| dir.join(name))
                    .find(|path| path.is_file())
                    .ok_or_else(|| {
                        PipelineError::Startup(format!(
                            "No model weights ({}) in '{}'",
                            WEIGHT_FILES.join(" or "),
                            dir.display()
                        ))
                    })?,
                tokenizer: local_file(dir, TOKENIZER_FILE)?,
            },
            ModelSource::Hub(repo) => {
                let loader = HfLoader::new(repo)?;
                ModelFiles {
                    config: loader.load(CONFIG_FILE)?,
                    weights: loader
                        .load(WEIGHT_FILES[0])
                        .or_else(|_| loader.load(WEIGHT_FILES[1]))?,
                    tokenizer: loader.load(TOKENIZER_FILE)?,
                }
            }
        };

        info!(source = %self, weights = %files.weights.display(), "resolved model files");
        Ok(files)
    }
}

impl From<&str> for ModelSource {
    fn from(locator: &str) -> Self {
        ModelSource::parse(locator)
    }
}

impl From<PathBuf> for ModelSource {
    fn from(dir: PathBuf) -> Self {
        ModelSource::Local(dir)
    }
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelSource::Local(dir) => write!(f, "{}", dir.display()),
            ModelSource::Hub(repo) => write!(f, "hf://{repo}"),
        }
    }
}

/// Paths to everything needed to build a classifier.
#[derive(Debug, Clone)]
pub(crate) struct ModelFiles {
    pub config: PathBuf,
    pub weights: PathBuf,
    pub tokenizer: PathBuf,
}

fn local_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(PipelineError::Startup(format!(
            "Model file '{}' not found in '{}'",
            name,
            dir.display()
        )))
    }
}

/// Fetches files from one Hub repo into the local cache.
struct HfLoader {
    repo: String,
    api: hf_hub::api::sync::ApiRepo,
}

impl HfLoader {
    fn new(repo: &str) -> Result<Self> {
        let api = Api::new().map_err(|e| {
            PipelineError::Startup(format!("Failed to initialize HuggingFace API: {e}"))
        })?;

        Ok(Self {
            repo: repo.to_string(),
            api: api.repo(Repo::new(repo.to_string(), RepoType::Model)),
        })
    }

    fn load(&self, filename: &str) -> Result<PathBuf> {
        self.api.get(filename).map_err(|e| {
            PipelineError::Startup(format!(
                "Failed to download '{}' from '{}': {}",
                filename, self.repo, e
            ))
        })
    }
}
