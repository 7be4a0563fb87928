use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_state_dir() -> PathBuf {
    PathBuf::from(".campusnav")
}

pub fn default_places_path() -> PathBuf {
    PathBuf::from("data/places.json")
}

pub fn default_place_types_path() -> PathBuf {
    PathBuf::from("data/place-types.json")
}

pub fn default_stale_after_hours() -> u64 {
    24
}

pub fn default_max_markers() -> usize {
    30
}

pub fn default_debounce_ms() -> u64 {
    300
}

pub fn default_poll_interval_ms() -> u64 {
    3000
}

pub fn default_reroute_threshold_m() -> f64 {
    15.0
}

pub fn default_arrival_radius_m() -> f64 {
    20.0
}
