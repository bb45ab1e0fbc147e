#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct StageStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub memory_usage_percent: f32,
    pub peak_memory_mb: u64,
    pub stage_time: Duration,
    pub elapsed_time: Duration,
}

/// Tracks wall time and process memory across pipeline stages.
/// Does nothing unless enabled, so it can always be constructed.
#[cfg(feature = "cli")]
pub struct PipelineMonitor {
    system: Option<System>,
    pid: Pid,
    start_time: Instant,
    stage_start: Instant,
    peak_memory: u64,
}

#[cfg(feature = "cli")]
impl PipelineMonitor {
    pub fn new(enabled: bool) -> Self {
        // System tables are only built for enabled monitors.
        let system = enabled.then(|| {
            let mut system = System::new_with_specifics(RefreshKind::everything());
            system.refresh_all();
            system
        });
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        let now = Instant::now();
        Self {
            system,
            pid,
            start_time: now,
            stage_start: now,
            peak_memory: 0,
        }
    }

    fn sample(&mut self, stage_time: Duration) -> Option<StageStats> {
        let system = self.system.as_mut()?;
        system.refresh_all();
        let process = system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        let total_memory = system.total_memory() / 1024 / 1024;
        let memory_percent = if total_memory > 0 {
            (memory_mb as f32 / total_memory as f32) * 100.0
        } else {
            0.0
        };

        if memory_mb > self.peak_memory {
            self.peak_memory = memory_mb;
        }

        Some(StageStats {
            cpu_usage: process.cpu_usage(),
            memory_usage_mb: memory_mb,
            memory_usage_percent: memory_percent,
            peak_memory_mb: self.peak_memory,
            stage_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    /// Logs stats for the stage that just finished and restarts the stage clock.
    pub fn stage_complete(&mut self, stage: &str) {
        let stage_time = self.stage_start.elapsed();
        self.stage_start = Instant::now();

        if let Some(stats) = self.sample(stage_time) {
            tracing::info!(
                "📊 {} - {:?}, CPU: {:.1}%, Memory: {}MB ({:.1}%), Peak: {}MB",
                stage,
                stats.stage_time,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.memory_usage_percent,
                stats.peak_memory_mb
            );
        }
    }

    pub fn finish(&mut self) {
        let stage_time = self.stage_start.elapsed();
        if let Some(stats) = self.sample(stage_time) {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }
}

#[cfg(feature = "cli")]
impl Default for PipelineMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(not(feature = "cli"))]
pub struct PipelineMonitor;

#[cfg(not(feature = "cli"))]
impl PipelineMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn stage_complete(&mut self, _stage: &str) {}

    pub fn finish(&mut self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
