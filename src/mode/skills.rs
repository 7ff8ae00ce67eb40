//! Required skill frequencies

use anyhow::{Context, Result};
use jobstat::analysis::{Aggregator, TokenFrequencyAggregator, build_color_mapping, top_n};
use jobstat::config::Config;

use super::{RunOptions, load_records};
use crate::chart::{self, SkillChartData};
use crate::output::{
    get_display_name, print_legend, print_ramp_info, print_skill_cloud, print_skill_table,
};

/// Run the skills pipeline: load -> count tokens -> color -> render
pub fn run_skills(opts: &RunOptions, config: &Config) -> Result<()> {
    let dataset = load_records(opts, config)?;
    let skills = &config.skills;

    let aggregator = TokenFrequencyAggregator::new(&skills.tokens_field, &skills.delimiter);
    let entities = aggregator
        .aggregate(&dataset.records)
        .context("Cannot count skills")?;

    // Colors are fitted on every skill; only the display is capped
    let mapping = build_color_mapping(&entities, &config.ramp)?;
    let shown = top_n(&entities, skills.max_words);
    tracing::debug!(total = entities.len(), shown = shown.len(), "selected top skills");

    if !opts.quiet {
        print_ramp_info(&mapping);
        println!();
    }
    print_skill_cloud(&shown, &mapping);
    println!();
    print_skill_table(&shown, &mapping);

    if !opts.quiet {
        println!();
        print_legend();
    }

    if let Some(path) = &opts.image {
        let data = SkillChartData {
            filename: get_display_name(&opts.file).to_string(),
            entities: shown,
        };
        chart::render_skills_chart(&data, &mapping, path)
            .map_err(anyhow::Error::msg)
            .context("Failed to render skills chart")?;
        eprintln!("Chart saved to: {}", path);
    }

    Ok(())
}
