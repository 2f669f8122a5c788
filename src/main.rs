use anyhow::Result;
use clap::{Parser, Subcommand};
use tiffin::cli::{self, Output};
use tiffin_shared::PlanInput;

/// tiffin - Meal subscription pricing
#[derive(Parser)]
#[command(name = "tiffin")]
#[command(about = "Price tiffin plans, summarise them and layer add-ons", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single plan
    Plan {
        /// Customer name
        #[arg(long)]
        name: Option<String>,

        /// veg, nonveg or jain (defaults to veg)
        #[arg(long)]
        meal_type: Option<String>,

        /// Number of days (defaults to 30)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Summarise a JSON array of plans
    Combine {
        /// File holding the plans, `-` for stdin
        #[arg(default_value = cli::STDIN)]
        plans: String,
    },
    /// Apply a JSON array of add-ons to a plan
    Addons {
        /// File holding the plan, `-` for stdin
        #[arg(long)]
        plan: String,

        /// File holding the add-ons, `-` for stdin
        #[arg(default_value = cli::STDIN)]
        addons: String,
    },
    /// Print the daily rate of each meal type
    Rates,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = tiffin::config::Config::load(args.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tiffin::observability::init_observability(
        "tiffin",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let output = Output {
        pretty: config.output.pretty,
    };
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Commands::Plan {
            name,
            meal_type,
            days,
        } => cli::plan(
            PlanInput {
                name,
                meal_type,
                days,
            },
            &output,
            &mut stdout,
        ),
        Commands::Combine { plans } => cli::combine(&plans, &output, &mut stdout),
        Commands::Addons { plan, addons } => cli::addons(&plan, &addons, &output, &mut stdout),
        Commands::Rates => cli::rates(&output, &mut stdout),
    }
}
