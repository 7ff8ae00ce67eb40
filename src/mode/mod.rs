//! CLI mode implementations

mod salary;
mod skills;

pub use salary::run_salary;
pub use skills::run_skills;

use std::path::Path;

use anyhow::{Context, Result};
use jobstat::config::Config;
use jobstat::dataset::{Dataset, load_dataset};

use crate::output::{get_display_name, print_file_info, print_preview};

/// Options shared by every mode
pub struct RunOptions {
    pub file: String,
    pub quiet: bool,
    pub preview: Option<usize>,
    pub image: Option<String>,
}

/// Load the dataset, apply column renames and print the optional preview
pub fn load_records(opts: &RunOptions, config: &Config) -> Result<Dataset> {
    let dataset = load_dataset(Path::new(&opts.file), &config.dataset)
        .with_context(|| format!("Failed to load dataset: {}", opts.file))?
        .rename_columns(&config.columns.rename);

    if !opts.quiet {
        print_file_info(
            get_display_name(&opts.file),
            dataset.len(),
            dataset.columns.len(),
        );
    }
    if let Some(limit) = opts.preview {
        print_preview(&dataset, limit);
    }

    Ok(dataset)
}
