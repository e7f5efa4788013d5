// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use product2pages::{
    deliver, synthesize, AppError, CommandLineInput, DeliveryTarget, DocumentDelivery, OutputPlan,
    OutputReport, PageSynthesizer, PipelineConfig, RawProductInput, RecordSource, SynthesisRun,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("product2pages.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: load → synthesize → deliver.
fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = ProductToPages::new(config);

    let raw = pipeline.load()?;
    let run = pipeline.synthesize(&raw)?;
    let report = pipeline.deliver(&run)?;
    pipeline.report_completion(&run, &report);

    if !run.is_success() {
        let failed = run.failures().count();
        return Err(AppError::PagesFailed {
            failed,
            total: run.outcomes.len(),
        });
    }

    Ok(())
}

/// Orchestrates loading the record, synthesizing the pages, and delivering them.
struct ProductToPages<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ProductToPages<'a> {
    fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    fn serialize_document(&self, document: &product2pages::PageDocument) -> Result<String, AppError> {
        let result = if self.config.compact {
            serde_json::to_string(document)
        } else {
            serde_json::to_string_pretty(document)
        };
        result.map_err(|source| AppError::Serialization {
            page_type: document.page_type(),
            source,
        })
    }

    /// Plans delivery for every successfully synthesized page.
    ///
    /// Failed page types never reach the plan — no partial document is
    /// written for them.
    fn plan_delivery(&self, run: &SynthesisRun) -> Result<OutputPlan, AppError> {
        let mut plan = OutputPlan::new();

        for document in run.documents() {
            let content = self.serialize_document(document)?;
            let page_type = document.page_type();

            if self.config.pipe {
                plan = plan.with_operation(DeliveryTarget::PrintToStdout { content });
            } else {
                plan = plan.with_operation(DeliveryTarget::WriteFile {
                    page_type,
                    path: self.config.output_path(page_type),
                    content,
                });
            }
        }

        Ok(plan)
    }

    /// Reports completion to the user with delivery confirmations.
    fn report_completion(&self, run: &SynthesisRun, report: &OutputReport) {
        if self.config.pipe {
            return;
        }

        for completed in &report.completed {
            if let DeliveryTarget::WriteFile {
                page_type, path, ..
            } = &completed.operation
            {
                println!("✓ {} page saved to {}", page_type, path.display());
            }
        }

        for (page_type, error) in run.failures() {
            eprintln!("⚠️  {} page failed: {}", page_type, error);
        }
    }
}

impl RecordSource for ProductToPages<'_> {
    fn load(&self) -> Result<RawProductInput, AppError> {
        let path = &self.config.input_path;
        log::info!("Loading product record from {}", path.display());

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| AppError::JsonParse {
            path: path.clone(),
            source,
        })
    }
}

impl PageSynthesizer for ProductToPages<'_> {
    fn synthesize(&self, raw: &RawProductInput) -> Result<SynthesisRun, AppError> {
        synthesize(raw)
    }
}

impl DocumentDelivery for ProductToPages<'_> {
    fn deliver(&self, run: &SynthesisRun) -> Result<OutputReport, AppError> {
        let plan = self.plan_delivery(run)?;
        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config)?;

    Ok(())
}
