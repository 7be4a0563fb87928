use crate::cli::context::CommandContext;
use crate::cli::MarkersArgs;
use crate::markers::ViewportRegion;
use crate::output::{format_frame, to_json};
use crate::search::CategoryFilter;
use crate::session::Session;
use std::path::Path;

pub fn execute(args: MarkersArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let ctx = CommandContext::load(config_path, &args.catalog, |config| {
        if let Some(max) = args.max {
            config.markers.max_markers = max;
        }
    })?;

    if let Some(id) = &args.selected {
        ctx.catalog.require_place(id)?;
    }

    let mut session = Session::new(&ctx.catalog, ctx.config.markers.max_markers, 0);
    session.set_viewport(ViewportRegion::new(
        args.lat,
        args.lng,
        args.lat_delta,
        args.lng_delta,
    ));

    let selection = session.selection_mut();
    selection.set_query(&args.query);
    selection.set_category(CategoryFilter::from_arg(args.category.as_deref()));
    if let Some(id) = &args.selected {
        selection.select(id);
    }

    let frame = session.render(0);

    if args.json {
        println!("{}", to_json(&frame)?);
    } else {
        print!("{}", format_frame(&frame));
    }
    Ok(())
}
