use crate::core::Pipeline;
use crate::domain::model::RunReport;
use crate::utils::error::Result;
use crate::utils::monitor::PipelineMonitor;
use chrono::Utc;

/// Drives a pipeline through its stages in order: extract, transform,
/// load, visualize. A stage failure stops the run; per-record problems
/// are the pipeline's business and never reach this level.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor_enabled: false,
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut monitor = PipelineMonitor::new(self.monitor_enabled);
        println!("Starting ETL process...");

        // Extract
        println!("Extracting data...");
        let raw_data = self.pipeline.extract().await?;
        let records_loaded = raw_data.len();
        println!("Extracted {} records", records_loaded);
        monitor.stage_complete("Extract");

        // Transform
        println!("Transforming data...");
        let result = self.pipeline.transform(raw_data).await?;
        println!(
            "Transformed {} records ({} rejected)",
            result.tweets.len(),
            result.rejections.total()
        );
        monitor.stage_complete("Transform");

        // Load
        println!("Loading data...");
        let landing_path = self.pipeline.load(&result).await?;
        println!("Output saved to: {}", landing_path);
        monitor.stage_complete("Load");

        // Visualize
        println!("Rendering charts...");
        let charts = self.pipeline.visualize(&result).await?;
        println!(
            "Rendered {} charts ({} skipped)",
            charts.rendered, charts.skipped
        );
        monitor.stage_complete("Visualize");

        monitor.finish();

        let report = RunReport {
            records_loaded,
            records_valid: result.tweets.len(),
            rejections: result.rejections,
            landing_path,
            charts,
            started_at,
            finished_at: Utc::now(),
        };
        println!(
            "ETL process completed in {} ms",
            report.duration().num_milliseconds()
        );

        Ok(report)
    }
}
