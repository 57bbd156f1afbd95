use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use population_growth::{
    analysis::{GrowthAnalyzer, SeriesSummary},
    config::{BoundsPreset, DashboardConfig, InputBounds},
    io::{self, SeriesWriter},
    models::GrowthParameters,
    visualization::{print_bounds_table, print_line_chart, print_series_table, print_summary_table},
};

#[derive(Parser)]
#[command(
    name = "growth-dashboard",
    about = "Population Growth Dashboard - Exponential growth model N(t) = N0 * e^(r*t)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Model parameters; any omitted value falls back to the active bounds' default.
#[derive(Args)]
struct ParamArgs {
    /// Initial population N0
    #[arg(short, long, allow_negative_numbers = true)]
    n0: Option<f64>,

    /// Intrinsic growth rate r (negative for decline)
    #[arg(short, long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Last time step t_max (inclusive)
    #[arg(short, long = "t-max", allow_negative_numbers = true)]
    t_max: Option<i64>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Path to a TOML dashboard configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input bounds preset: classic or extended (overrides the config file)
    #[arg(long)]
    preset: Option<BoundsPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the growth series and display the summary, table, and chart
    Run {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Skip the input range check
        #[arg(long)]
        unbounded: bool,

        /// Hide the (t, N) table
        #[arg(long)]
        no_table: bool,

        /// Hide the line chart
        #[arg(long)]
        no_chart: bool,

        /// Chart width in columns
        #[arg(long)]
        width: Option<usize>,

        /// Chart height in rows
        #[arg(long)]
        height: Option<usize>,
    },

    /// Export the growth series to CSV, JSON, or Excel
    Export {
        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        config: ConfigArgs,

        /// Skip the input range check
        #[arg(long)]
        unbounded: bool,

        /// Output file path (.csv, .json, or .xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show the input bounds in effect
    Bounds {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Start the web dashboard
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn load_config(args: &ConfigArgs) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(preset) = args.preset {
        config.preset = preset;
        config.bounds = None;
    }
    Ok(config)
}

fn resolve_parameters(
    args: &ParamArgs,
    bounds: &InputBounds,
    unbounded: bool,
) -> Result<GrowthParameters> {
    let n0 = args.n0.unwrap_or(bounds.n0.default);
    let r = args.rate.unwrap_or(bounds.r.default);
    let params = match args.t_max {
        Some(t_max) => GrowthParameters::new(n0, r, t_max)?,
        None => GrowthParameters::from_real(n0, r, bounds.t_max.default)?,
    };
    if !unbounded {
        bounds.check(&params)?;
    }
    Ok(params)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            params,
            config,
            unbounded,
            no_table,
            no_chart,
            width,
            height,
        } => {
            let config = load_config(&config)?;
            let params = resolve_parameters(&params, &config.input_bounds(), unbounded)?;

            let mut chart = config.chart;
            if let Some(w) = width {
                chart.width = w;
            }
            if let Some(h) = height {
                chart.height = h;
            }

            println!(
                "\n{}",
                format!(
                    "Population Growth: N0 = {}, r = {}, t = 0..={}",
                    params.n0(),
                    params.r(),
                    params.t_max()
                )
                .bold()
                .cyan()
            );

            let series = GrowthAnalyzer::new(&params).series();
            print_summary_table(&SeriesSummary::compute(&params, &series));

            if !no_table {
                print_series_table(&series);
            }

            if !no_chart {
                print_line_chart(&series, &chart);
            }
        }

        Commands::Export {
            params,
            config,
            unbounded,
            output,
            pretty,
        } => {
            let config = load_config(&config)?;
            let params = resolve_parameters(&params, &config.input_bounds(), unbounded)?;
            let writer = io::writer_for_path(&output, pretty)?;

            let series = GrowthAnalyzer::new(&params).series();
            writer.write(&params, &series, &output)?;

            println!(
                "{} Wrote {} points to {}",
                "Success:".green().bold(),
                series.len(),
                output.display()
            );
        }

        Commands::Bounds { config } => {
            let config = load_config(&config)?;
            print_bounds_table(&config.input_bounds());
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, config } => {
            let config = load_config(&config)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(population_growth::web::start_server(port, config))?;
        }
    }

    Ok(())
}
