#[allow(clippy::module_inception)]
pub mod config;

pub use config::{
    config_path, get_base_url, load_config, load_config_from, normalize_base_url, save_config,
    save_config_to, Config,
};
