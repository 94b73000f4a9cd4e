use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vetmap_core::{DisplayState, create_controller};

mod cli;
mod config;
mod geolocation;
mod render;
mod session;

use cli::{Cli, Command};
use geolocation::GeolocationProvider;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;
    let options = config.geolocation.options();
    let controller = create_controller(&config, DisplayState::default())
        .context("Failed to set up the estimator")?;

    match cli.command {
        Command::Estimate {
            selections,
            json,
            geolocation,
        } => {
            let provider = GeolocationProvider::from_args(&geolocation);
            let controller =
                session::run_estimate(controller, provider, options, &selections).await?;

            let destination = controller.active_destination();
            if json {
                println!("{}", render::render_json(destination, controller.publisher())?);
            } else {
                print!("{}", render::render_state(destination, controller.publisher()));
            }
        }
        Command::Table { geolocation } => {
            let provider = GeolocationProvider::from_args(&geolocation);
            let controller = session::run_estimate(controller, provider, options, &[]).await?;

            let rows = controller.estimate_all();
            println!("{}", render::render_table(&rows, controller.active()));
            if let Some(note) = controller.publisher().note {
                println!("{note}");
            }
        }
        Command::Interactive { geolocation } => {
            let provider = GeolocationProvider::from_args(&geolocation);
            session::run_interactive(controller, provider, options).await?;
        }
    }

    Ok(())
}
