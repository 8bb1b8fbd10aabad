mod cli;
mod commands;

use campus_timetable_client::{ClientConfig, HttpTimetableClient};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Command;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::USAGE);
            std::process::exit(2);
        }
    };

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging on stderr so rendered output stays clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(base_url = %config.base_url, "Starting timetable client");
    let client = HttpTimetableClient::new(config)?;

    let result = match command {
        Command::Show(view) => commands::show(&client, view).await,
        Command::Courses => commands::courses(&client).await,
        Command::Subjects(course_id) => commands::subjects(&client, course_id).await,
        Command::AddSlot(args) => commands::add_slot(&client, args)
            .await
            .map(|slot| format!("{}\n", commands::describe_created(&slot))),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e.into())
        }
    }
}
