mod merge;
mod parser;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "room_importer",
    about = "Import room specification markdown into rooms_data.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge spec documents into the rooms data file
    Merge {
        /// Path to the rooms data JSON document
        #[arg(long, default_value = "castle/Resources/rooms_data.json")]
        data: PathBuf,
        /// Directory of room_*.md specification documents
        #[arg(long, default_value = "rooms/specifications")]
        specs: PathBuf,
    },
    /// Parse one spec document and print the extracted record as JSON
    Parse {
        /// Path to a room_*.md document
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Merge { data, specs } => {
            let updated = merge::merge(&data, &specs)?;
            println!("Updated {} rooms with rich data from specifications", updated);
        }
        Commands::Parse { file } => {
            let spec = parser::parse_room_spec(&file)?;
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
    }

    Ok(())
}
