//! Average salary per job title

use anyhow::{Context, Result};
use jobstat::analysis::{Aggregator, CategoricalMeanAggregator, build_color_mapping, most_common};
use jobstat::config::Config;

use super::{RunOptions, load_records};
use crate::chart::{self, SalaryChartData};
use crate::output::{print_legend, print_ramp_info, print_salary_table};

/// Run the salary pipeline: load -> mean by title -> color -> render
pub fn run_salary(opts: &RunOptions, config: &Config) -> Result<()> {
    let dataset = load_records(opts, config)?;
    let salary = &config.salary;

    let industry = most_common(&dataset.records, &salary.industry_field).map(|(name, count)| {
        tracing::debug!(industry = %name, count, "most common industry");
        name
    });

    let aggregator = CategoricalMeanAggregator::new(&salary.grouping_field, &salary.value_field);
    let entities = aggregator
        .aggregate(&dataset.records)
        .context("Cannot compute average salaries")?;
    let mapping = build_color_mapping(&entities, &config.ramp)?;

    if let Some(name) = &industry {
        println!("Most common industry: {}", name);
        println!();
    }
    if !opts.quiet {
        print_ramp_info(&mapping);
        println!();
    }
    print_salary_table(&entities, &mapping);

    if !opts.quiet {
        println!();
        print_legend();
    }

    if let Some(path) = &opts.image {
        let data = SalaryChartData {
            entities,
            most_common_industry: industry,
        };
        chart::render_salary_chart(&data, &mapping, path)
            .map_err(anyhow::Error::msg)
            .context("Failed to render salary chart")?;
        eprintln!("Chart saved to: {}", path);
    }

    Ok(())
}
