use std::path::{Path, PathBuf};

use crate::Config;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let content = read_file_content_if_exist(config_path)?
        .ok_or_else(|| eyre::eyre!("config path '{config_path}' was not found"))?;

    parse(config_path, &content)
}

/// Same as [`load`], but a missing file yields the default configuration.
/// A file that exists but cannot be parsed is still an error.
pub fn load_or_default(config_path: &str) -> eyre::Result<Config> {
    match read_file_content_if_exist(config_path)? {
        Some(content) => parse(config_path, &content),
        None => Ok(Config::default()),
    }
}

fn parse(config_path: &str, content: &str) -> eyre::Result<Config> {
    toml::from_str(content)
        .map_err(|e| eyre::eyre!("Failed to parse config file '{config_path}': {e}"))
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = expand_path(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    Ok(Some(content))
}

fn expand_path(file_path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(file_path);
    Path::new(expanded.as_ref()).to_path_buf()
}
