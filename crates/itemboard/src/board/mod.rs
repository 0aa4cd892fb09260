use std::sync::Arc;

use crate::fetcher::HttpFetcher;
use crate::holder::ItemListHolder;
use crate::prelude::{eprintln, *};

pub mod list;
pub mod watch;

/// Build a holder fetching from `base_url`; the initial refresh starts right away
pub fn holder_for(global: &crate::Global) -> Result<ItemListHolder> {
    let fetcher = HttpFetcher::new(&global.base_url)?;

    if global.verbose {
        eprintln!("Endpoint: {}", fetcher.endpoint());
        eprintln!();
    }
    log::info!("fetching records from {}", fetcher.endpoint());

    Ok(ItemListHolder::new(Arc::new(fetcher)))
}
