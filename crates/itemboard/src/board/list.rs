use crate::prelude::{eprintln, println, *};
use itemboard_core::state::DisplayState;

use super::holder_for;
use crate::holder::ItemListHolder;
use crate::render::{format_state_json, format_state_text};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Print items in published order as a table instead of grouped by list
    #[arg(long)]
    pub flat: bool,

    /// Output the display state as JSON
    #[arg(long, conflicts_with = "flat")]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching items...");
    }

    let holder = holder_for(&global)?;
    let state = settled_state(&holder).await?;

    if options.json {
        println!("{}", format_state_json(&state)?);
    } else if !state.is_failed() {
        print!("{}", format_state_text(&state, options.flat));
    }

    if state.is_failed() {
        return Err(Error::FetchFailed(state.error).into());
    }

    Ok(())
}

/// Wait for every refresh in flight to complete and return the published state
pub async fn settled_state(holder: &ItemListHolder) -> Result<DisplayState> {
    let mut rx = holder.subscribe();
    let state = rx
        .wait_for(|state| !state.loading)
        .await
        .map_err(|_| Error::HolderClosed)?
        .clone();
    Ok(state)
}
