use crate::error::{CompassError, Result};
use crate::types::config::CompassConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".compass/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/compass/config.toml";

pub fn load_config(root: &Path) -> Result<Option<CompassConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Existing config files in increasing precedence: global, repo, local.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.is_file())
        .collect()
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CompassConfig>> {
    if !root.join(DEFAULT_CONFIG_FILE).is_file() {
        tracing::debug!(root = %root.display(), "no {DEFAULT_CONFIG_FILE}, using built-in scoring");
        return Ok(None);
    }

    let mut merged = Table::new();
    for path in layer_paths(root, global_path) {
        overlay_table(&mut merged, parse_layer(&path)?);
        tracing::info!(path = %path.display(), "applied config layer");
    }

    Value::Table(merged)
        .try_into()
        .map(Some)
        .map_err(|e: toml::de::Error| CompassError::ConfigParse(e.to_string()))
}

fn parse_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| CompassError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge key by key; any other value in `overlay` replaces
/// the one in `base`.
fn overlay_table(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(incoming) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay_table(existing, incoming),
                _ => {
                    base.insert(key, Value::Table(incoming));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
