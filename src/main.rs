mod chart;
mod mode;
mod output;

use std::path::Path;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use jobstat::color::ColorRamp;
use jobstat::config::Config;
use mode::{RunOptions, run_salary, run_skills};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "jobstat",
    version,
    about = "Job posting analyzer: average salary per title and skill frequencies, colored by a truncated color ramp",
    after_help = "Examples:
  jobstat jobs.csv                                Average salary per job title
  jobstat --skills jobs.csv                       Required skill frequencies
  jobstat jobs.csv --image salary.png             Write the gradient line chart
  jobstat --skills --top 30 jobs.json             Show the 30 most common skills
  jobstat --sheet Sheet1 data.xlsx                Read one worksheet of a workbook
  jobstat --ramp viridis --max 0.9 jobs.csv       Use a different ramp and cutoff
  jobstat --config jobstat.toml jobs.jsonl        Read settings from a file"
)]
struct Args {
    /// Dataset to analyze (CSV with header, JSON array, JSON lines, or spreadsheet)
    #[arg(required = true)]
    file: String,

    /// Skill frequency mode instead of average salary
    #[arg(short, long)]
    skills: bool,

    /// Configuration file (defaults to ./jobstat.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Worksheet to read from a spreadsheet (defaults to the first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Column to group salaries by
    #[arg(long, value_name = "COLUMN")]
    group_field: Option<String>,

    /// Numeric column averaged per group
    #[arg(long, value_name = "COLUMN")]
    value_field: Option<String>,

    /// Column holding delimiter-separated skills
    #[arg(long, value_name = "COLUMN")]
    tokens_field: Option<String>,

    /// Skill delimiter
    #[arg(long, value_name = "TEXT")]
    delimiter: Option<String>,

    /// Number of skills to show
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Base color ramp (inferno, magma, plasma, viridis)
    #[arg(long, value_name = "NAME")]
    ramp: Option<String>,

    /// Lower end of the ramp to keep (0-1)
    #[arg(long, value_name = "T")]
    min: Option<f64>,

    /// Upper end of the ramp to keep (0-1)
    #[arg(long, value_name = "T")]
    max: Option<f64>,

    /// Number of samples in the truncated ramp
    #[arg(long, value_name = "N")]
    resolution: Option<usize>,

    /// Print the first N rows of the dataset
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Output chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Initialize logging based on verbosity settings; RUST_LOG wins when set
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jobstat={}", args.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

/// Load the config file, then let explicit flags override it
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::load_default()?.unwrap_or_default(),
    };

    if let Some(sheet) = &args.sheet {
        config.dataset.sheet = Some(sheet.clone());
    }
    if let Some(field) = &args.group_field {
        config.salary.grouping_field = field.clone();
    }
    if let Some(field) = &args.value_field {
        config.salary.value_field = field.clone();
    }
    if let Some(field) = &args.tokens_field {
        config.skills.tokens_field = field.clone();
    }
    if let Some(delimiter) = &args.delimiter {
        config.skills.delimiter = delimiter.clone();
    }
    if let Some(top) = args.top {
        config.skills.max_words = top;
    }
    if let Some(ramp) = &args.ramp {
        config.ramp.base_ramp_name = ramp.clone();
    }
    if let Some(min) = args.min {
        config.ramp.minval = min;
    }
    if let Some(max) = args.max {
        config.ramp.maxval = max;
    }
    if let Some(resolution) = args.resolution {
        config.ramp.resolution = resolution;
    }

    tracing::debug!(?config, "effective configuration");
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    // Validate ramp name up front so a typo fails before the dataset is read
    ColorRamp::named(&config.ramp.base_ramp_name)?;

    if config.skills.max_words == 0 {
        anyhow::bail!("--top must be at least 1");
    }

    // Validate image output path
    if let Some(ref path) = args.image
        && let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        anyhow::bail!("Directory does not exist: {}", parent.display());
    }

    let opts = RunOptions {
        file: args.file,
        quiet: args.quiet,
        preview: args.preview,
        image: args.image,
    };

    if args.skills {
        run_skills(&opts, &config)
    } else {
        run_salary(&opts, &config)
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_logging(&args);

    if let Err(e) = run(args) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
