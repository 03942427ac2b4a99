use std::time::{Duration, Instant};

/// Statistics for one classification.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Wall time from entering the pipeline to having a label.
    pub total_time: Duration,
}

impl PipelineStats {
    /// Start timing (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Tracks timing from creation to `finish`.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
}

impl PipelineStatsBuilder {
    pub fn finish(self) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineStats;
    use std::time::Duration;

    #[test]
    fn measures_elapsed_time() {
        let builder = PipelineStats::start();
        std::thread::sleep(Duration::from_millis(5));
        let stats = builder.finish();

        assert!(stats.total_time >= Duration::from_millis(5));
    }
}
