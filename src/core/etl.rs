use crate::core::writer::{build_rows, count_by_stratum, format_counts};
use crate::core::Pipeline;
use crate::domain::model::{CollectionResult, RunSummary};
use crate::utils::error::Result;

pub struct CandidateEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CandidateEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, collect, write the candidate file and print the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        let result = self.collect().await?;

        tracing::info!("Writing candidate file...");
        let output_path = self.pipeline.load(&result).await?;

        let summary = summarize(&result, Some(output_path));
        print_summary(&summary);
        Ok(summary)
    }

    /// Same as `run` but stops before anything is written.
    pub async fn preview(&self) -> Result<RunSummary> {
        let result = self.collect().await?;
        tracing::info!("Dry run: candidate file not written");

        let summary = summarize(&result, None);
        print_summary(&summary);
        Ok(summary)
    }

    async fn collect(&self) -> Result<CollectionResult> {
        tracing::info!("Loading seed strata...");
        let strata = self.pipeline.extract().await?;
        tracing::info!("Loaded {} strata", strata.len());

        let result = self.pipeline.transform(strata).await?;
        for warning in &result.warnings {
            tracing::warn!(
                stratum = %warning.stratum,
                found = warning.found,
                required = warning.required,
                "Stratum below minimum"
            );
            println!("{}", warning);
        }

        Ok(result)
    }
}

pub fn summarize(result: &CollectionResult, output_path: Option<String>) -> RunSummary {
    let rows = build_rows(&result.samples);
    RunSummary {
        output_path,
        counts: count_by_stratum(&rows),
        total: rows.len(),
        warnings: result.warnings.clone(),
    }
}

/// Console lines printed after a run.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let first = match &summary.output_path {
        Some(path) => format!("Wrote: {}", path),
        None => "Dry run: nothing written".to_string(),
    };
    vec![
        first,
        format!("Counts: {}", format_counts(&summary.counts)),
        format!("Total: {}", summary.total),
    ]
}

fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
