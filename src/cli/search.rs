use crate::cli::context::CommandContext;
use crate::cli::SearchArgs;
use crate::output::{format_places, to_json};
use crate::search::{self, CategoryFilter};
use std::path::Path;
use tracing::{info, warn};

pub fn execute(args: SearchArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let ctx = CommandContext::load(config_path, &args.catalog, |_| {})?;

    let category = CategoryFilter::from_arg(args.category.as_deref());
    if let CategoryFilter::Only(id) = &category {
        if ctx.catalog.place_type(id).is_none() {
            warn!("Place type '{}' is not in the catalog", id);
        }
    }

    let matches = search::apply(&ctx.catalog.places, &category, &args.query);
    info!(
        "{} of {} places match query {:?} in category {}",
        matches.len(),
        ctx.catalog.places.len(),
        args.query,
        category
    );

    if args.json {
        println!("{}", to_json(&matches)?);
    } else {
        print!("{}", format_places(&matches));
    }
    Ok(())
}
