#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod board;
mod error;
mod fetcher;
mod holder;
mod prelude;
mod render;

/// Base URL of the hiring list; `hiring.json` is resolved against it
pub const DEFAULT_BASE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/";

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch the hiring.json item list, drop unnamed items and show them grouped by list"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL serving hiring.json
    #[clap(
        long,
        env = "ITEMBOARD_BASE_URL",
        global = true,
        default_value = DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Whether to display additional information.
    #[clap(long, env = "ITEMBOARD_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Fetch the list once and print it
    List(crate::board::list::ListOptions),

    /// Keep the list on screen and refresh it on demand
    Watch(crate::board::watch::WatchOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::board::list::run(options, app.global).await,
        SubCommands::Watch(options) => crate::board::watch::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
