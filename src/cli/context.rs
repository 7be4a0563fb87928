use crate::catalog::Catalog;
use crate::cli::CatalogArgs;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::CampusnavError;
use crate::state::State;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config and catalog shared by the data commands
pub struct CommandContext {
    pub config: Config,
    pub catalog: Catalog,
}

impl CommandContext {
    pub fn load(
        config_path: Option<&Path>,
        catalog_args: &CatalogArgs,
        overrides: impl FnOnce(&mut Config),
    ) -> Result<Self, CampusnavError> {
        let explicit = config_path.is_some();
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        info!("Loading config from {:?}", path);
        let mut config = Config::load_or_default(&path, explicit)?;

        // Apply CLI overrides
        if let Some(places) = &catalog_args.places {
            config.catalog.places = places.clone();
        }
        if let Some(place_types) = &catalog_args.place_types {
            config.catalog.place_types = place_types.clone();
        }
        overrides(&mut config);

        config.validate()?;

        let mut state = State::load(&config.state_dir);
        let catalog = Catalog::load(&config.catalog, &mut state)?;
        info!(
            "Catalog of {} places, fetched {}",
            catalog.places.len(),
            catalog.fetched_at.to_rfc3339()
        );

        if let Err(e) = state.save(&config.state_dir) {
            warn!("Failed to save state: {}", e);
        }

        Ok(Self { config, catalog })
    }
}
