use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wayfare::application::manage_config::CONFIG_KEYS;
use wayfare::application::render_itinerary::render_file;
use wayfare::application::{init::init, ConfigService, PlanTripService};
use wayfare::cli::output::{format_config, format_outline, format_summary};
use wayfare::cli::{Cli, Commands};
use wayfare::domain::{Outline, Page, TripQuery};
use wayfare::error::WayfareError;
use wayfare::infrastructure::{HtmlDocument, HttpPlannerApi, Workspace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; RUST_LOG wins over the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "wayfare=debug" } else { "wayfare=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), WayfareError> {
    match cli.command {
        Some(Commands::Plan {
            from,
            destination,
            start,
            end,
            interests,
            output,
        }) => {
            let query = TripQuery::parse(&from, &destination, &start, &end, &interests)?;

            let config = Workspace::config_or_default()?;
            let api = HttpPlannerApi::from_config(&config)?;
            tracing::debug!(api_base = api.base(), "using planner backend");
            let service = PlanTripService::new(api, config.image_count, config.hotel_count);

            println!(
                "Planning {} days: {} -> {}",
                query.days(),
                query.from,
                query.destination
            );

            let mut page = Page::new();
            let result = service.execute(&query, &mut page).await;

            // The page is written even when the itinerary failed, so the
            // inline error is visible in the export too
            let output = output.unwrap_or_else(|| config.output.clone());
            HtmlDocument::new(&page).write_to(&output)?;

            let summary = result?;
            let outline = Outline::from_markdown(page.itinerary.as_deref().unwrap_or_default());
            print!("{}", format_outline(&outline));
            println!("{}", format_summary(&summary));
            println!("Saved {}", output.display());
            Ok(())
        }
        Some(Commands::Render { input, output }) => {
            let output = output.unwrap_or_else(|| default_render_output(&input));
            let outline = render_file(&input, &output)?;

            print!("{}", format_outline(&outline));
            println!("Saved {}", output.display());
            Ok(())
        }
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized wayfare config at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let workspace = Workspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                print!("{}", format_config(&config));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: wayfare config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        None => {
            println!("wayfare - Terminal travel planner");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn default_render_output(input: &std::path::Path) -> PathBuf {
    input.with_extension("html")
}
