use crate::cli::context::CommandContext;
use crate::cli::ReplayArgs;
use crate::output::{format_frame, to_json, write_json};
use crate::session::{replay, EventScript, Session};
use std::path::Path;
use tracing::{debug, info};

pub fn execute(args: ReplayArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let ctx = CommandContext::load(config_path, &args.catalog, |config| {
        if let Some(debounce_ms) = args.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
    })?;

    info!("Replaying {:?}", args.script);
    let script = EventScript::load(&args.script)?;

    let mut session = Session::new(
        &ctx.catalog,
        ctx.config.markers.max_markers,
        ctx.config.search.debounce_ms,
    );
    let frames = replay(&mut session, &script);
    debug!("Final selection: {:?}", session.selection());

    if let Some(out) = &args.out {
        write_json(out, &frames)?;
        info!("Frames written to {:?}", out);
    }

    if args.json {
        println!("{}", to_json(&frames)?);
    } else if frames.is_empty() {
        println!("*No frames rendered*");
    } else {
        for frame in &frames {
            println!("{}", format_frame(frame));
        }
    }
    Ok(())
}
