use candle_core::Device;
use tracing::info;

use crate::error::{PipelineError, Result};

/// Where the model should run. Resolved once, when the pipeline is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceRequest {
    #[default]
    Cpu,
    Cuda(usize),
    /// First CUDA device when one is usable, CPU otherwise.
    Auto,
}

impl DeviceRequest {
    pub fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => Device::new_cuda(i).map_err(|e| {
                PipelineError::Startup(format!(
                    "Failed to init CUDA device {i}: {e}. Try CPU as fallback."
                ))
            }),
            DeviceRequest::Auto => {
                let device = Device::cuda_if_available(0).map_err(|e| {
                    PipelineError::Startup(format!("Failed to probe CUDA device 0: {e}"))
                })?;
                info!(device = ?device.location(), "auto-selected inference device");
                Ok(device)
            }
        }
    }
}

impl std::fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceRequest::Cpu => write!(f, "cpu"),
            DeviceRequest::Cuda(i) => write!(f, "cuda:{i}"),
            DeviceRequest::Auto => write!(f, "auto"),
        }
    }
}
