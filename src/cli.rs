use clap::{Parser, Subcommand};

/// Carbomatic: marathon carb-loading calculator and meal planner.
#[derive(Parser, Debug)]
#[command(name = "carbomatic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the nutrition service (overrides --origin).
    #[arg(long, global = true, env = "CARBOMATIC_API_URL")]
    pub api_url: Option<String>,

    /// Deployed site origin; the service is reached at <origin>/api.
    #[arg(long, global = true, env = "CARBOMATIC_ORIGIN")]
    pub origin: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long, global = true, default_value_t = crate::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Step through input, carb results and meal plan interactively.
    #[default]
    Wizard,

    /// Calculate carb targets once and print them.
    Calculate {
        /// Body weight in pounds.
        #[arg(long)]
        weight: String,

        /// Carb-loading window in days.
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..=3))]
        days: u32,
    },

    /// Calculate carb targets, then generate and print a meal plan.
    Plan {
        /// Body weight in pounds.
        #[arg(long)]
        weight: String,

        /// Carb-loading window in days.
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..=3))]
        days: u32,

        /// Food to favor in the plan (repeatable).
        #[arg(long = "prefer", value_name = "FOOD")]
        preferences: Vec<String>,
    },

    /// Print the frequently asked questions.
    Faq,
}
