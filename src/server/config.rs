use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::models::DEFAULT_MAX_LENGTH;
use crate::normalization::NormalizationConfig;
use crate::sentiment::{DeviceRequest, ModelSource};

/// Startup configuration. Every option can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "comment-sentiment-server",
    version,
    about = "Serve Negative/Neutral/Positive predictions for short comments"
)]
pub struct ServerConfig {
    /// Tab-separated slang dictionary (slang<TAB>replacement)
    #[arg(long, env = "TEENCODE_PATH")]
    pub teencode_path: PathBuf,

    /// Local model directory or Hugging Face Hub repo id
    #[arg(long, env = "MODEL_PATH")]
    pub model_path: String,

    /// Address to bind
    #[arg(long, env = "SENTIMENT_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, env = "SENTIMENT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Run the model on this CUDA device. Without it the first CUDA device is
    /// used when available, the CPU otherwise
    #[arg(long, env = "SENTIMENT_CUDA_DEVICE")]
    pub cuda: Option<usize>,

    /// Tokens kept per comment; longer input is truncated
    #[arg(long, env = "SENTIMENT_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Do not lowercase comments before classification
    #[arg(long, env = "SENTIMENT_KEEP_CASE")]
    pub keep_case: bool,

    /// Do not replace slang tokens before classification
    #[arg(long, env = "SENTIMENT_KEEP_SLANG")]
    pub keep_slang: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn model_source(&self) -> ModelSource {
        ModelSource::parse(&self.model_path)
    }

    pub fn device_request(&self) -> DeviceRequest {
        self.cuda.map_or(DeviceRequest::Auto, DeviceRequest::Cuda)
    }

    pub fn normalization(&self) -> NormalizationConfig {
        NormalizationConfig {
            replace_slang: !self.keep_slang,
            lowercase: !self.keep_case,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> ServerConfig {
        let base = [
            "comment-sentiment-server",
            "--teencode-path",
            "data/teencode.txt",
            "--model-path",
            "org/sentiment",
        ];
        ServerConfig::try_parse_from(base.iter().chain(args)).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);

        assert_eq!(config.bind_addr(), "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.max_length, 256);
        assert_eq!(config.device_request(), DeviceRequest::Auto);
        assert_eq!(config.normalization(), NormalizationConfig::default());
        assert_eq!(config.model_source(), ModelSource::Hub("org/sentiment".into()));
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--cuda",
            "1",
            "--keep-case",
            "--keep-slang",
        ]);

        assert_eq!(config.bind_addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.device_request(), DeviceRequest::Cuda(1));
        assert_eq!(
            config.normalization(),
            NormalizationConfig {
                replace_slang: false,
                lowercase: false,
            }
        );
    }

    #[test]
    fn paths_are_required() {
        let command = ServerConfig::command();

        for id in ["teencode_path", "model_path"] {
            let arg = command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .unwrap();
            assert!(arg.is_required_set(), "{id} should be required");
        }
    }
}
