// src/config.rs
use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::AppError;
use crate::types::PageType;
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Path to the raw product record (JSON)
    pub input: String,

    /// Directory to write the generated page documents into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: String,

    /// Pipe mode - print the documents to stdout instead of writing files
    #[arg(short, long, default_value_t = false)]
    pub pipe: bool,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration — validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub out_dir: PathBuf,
    pub pipe: bool,
    pub compact: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.input.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "input record path must not be empty".to_string(),
            ));
        }

        Ok(PipelineConfig {
            input_path: PathBuf::from(cli.input),
            out_dir: PathBuf::from(cli.out_dir),
            pipe: cli.pipe,
            compact: cli.compact,
            verbose: cli.verbose,
        })
    }

    /// Returns the output path for one page type.
    pub fn output_path(&self, page_type: PageType) -> PathBuf {
        self.out_dir.join(format!("{}.json", page_type.as_str()))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("product.json"),
            out_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pipe: false,
            compact: false,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_path_is_rejected() {
        let cli = CommandLineInput {
            input: "  ".to_string(),
            out_dir: DEFAULT_OUTPUT_DIR.to_string(),
            pipe: false,
            compact: false,
            verbose: false,
        };
        assert!(PipelineConfig::resolve(cli).is_err());
    }

    #[test]
    fn output_paths_are_named_by_page_type() {
        let config = PipelineConfig::default();
        assert!(config
            .output_path(PageType::Faq)
            .ends_with(PathBuf::from("faq.json")));
    }
}
