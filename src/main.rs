use clap::{Parser, Subcommand};
use log::{debug, error};

use thirsty::{
    render_card, render_search_results, DrinkLookup, LookupResult, ThirstyConfig, ThirstyError,
};

#[derive(Parser)]
#[command(
    name = "thirsty",
    version,
    about = "Search cocktails and see what goes into them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search drinks by name
    Search {
        /// Drink name, or part of it
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Show ingredients, proportions and instructions for one drink
    Show {
        /// Catalog id, as printed by `search`
        id: String,
        /// Leave out the proportion chart
        #[arg(long)]
        no_chart: bool,
        /// Don't color ingredient swatches
        #[arg(long)]
        no_color: bool,
        /// Print the analysed drink as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = ThirstyConfig::load()?;
    debug!("{:#?}", config);

    match cli.command {
        Command::Search { term } => {
            let term = term.join(" ");
            let result = DrinkLookup::builder().search(term).build().await?;
            if let LookupResult::Drinks(drinks) = result {
                print!("{}", render_search_results(&drinks));
            }
        }
        Command::Show {
            id,
            no_chart,
            no_color,
            json,
        } => {
            let card = match DrinkLookup::builder().id(&id).build().await {
                Ok(LookupResult::Card(card)) => card,
                Ok(_) => return Err("Unexpected lookup result".into()),
                Err(ThirstyError::DrinkNotFound(_)) => {
                    error!("No drink with id {}", id);
                    eprintln!("Drink not found");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&card)?);
            } else {
                let mut chart = config.chart;
                chart.show_chart &= !no_chart;
                chart.use_color &= !no_color;
                print!("{}", render_card(&card, &chart));
            }
        }
    }

    Ok(())
}
