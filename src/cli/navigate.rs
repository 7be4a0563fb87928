use crate::cli::context::CommandContext;
use crate::cli::NavigateArgs;
use crate::navigation::{
    poll_navigation, DirectRouteProvider, Narrator, TracePositionSource,
};
use crate::output::{format_navigation, to_json};
use std::path::Path;
use tracing::info;

/// Prints guidance where a speech engine would speak it
struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn announce(&mut self, text: &str) {
        println!("🔊 {}", text);
    }
}

pub async fn execute(args: NavigateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let ctx = CommandContext::load(config_path, &args.catalog, |config| {
        if let Some(interval_ms) = args.interval_ms {
            config.navigation.poll_interval_ms = interval_ms;
        }
    })?;

    let destination = ctx.catalog.require_place(&args.to)?;
    let mut positions = TracePositionSource::load(&args.trace)?;
    info!(
        "Loaded {} fixes from {:?}",
        positions.remaining(),
        args.trace
    );

    let summary = poll_navigation(
        destination,
        &ctx.config.navigation,
        &mut positions,
        &DirectRouteProvider,
        &mut ConsoleNarrator,
    )
    .await?;

    if args.json {
        println!("{}", to_json(&summary)?);
    } else {
        print!("{}", format_navigation(&summary));
    }
    Ok(())
}
