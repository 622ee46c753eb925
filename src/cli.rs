use crate::commands;
use crate::db::{Catalogue, CatalogueConfig};
use crate::output::Output;
use crate::utils::errors::InternalError;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "planes")]
#[command(version)]
#[command(about = "record and query flights", long_about = None)]
pub struct Cli {
    /// The database file name
    #[arg(long, global = true, default_value = "planes.db")]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a new plane
    Add {
        /// The plane's destination
        #[arg(short, long)]
        destination: String,
        /// The plane's number
        #[arg(short, long)]
        num: i64,
        /// The plane's type
        #[arg(short, long)]
        typ: String,
    },
    /// Display all planes
    Display {},
    /// Select the planes of one type
    Select {
        /// The required type
        #[arg(short = 'T', long = "type")]
        type_title: String,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    if let Err(err) = run_cli(cli, Output::default()).await {
        eprintln!("\n{} {}", "an error occurred:".red(), err);
        process::exit(1);
    }
}

pub async fn run_cli(cli: Cli, output: Output) -> Result<(), InternalError> {
    let catalogue = Catalogue::new(CatalogueConfig { db_path: cli.db });
    catalogue.initialise().await?;

    match cli.command {
        None => Ok(()),
        Some(Commands::Add {
            destination,
            num,
            typ,
        }) => commands::add::add(&catalogue, destination, typ, num).await,
        Some(Commands::Display {}) => commands::display::display(&catalogue, &output).await,
        Some(Commands::Select { type_title }) => {
            commands::select::select(&catalogue, type_title, &output).await
        }
    }
}
