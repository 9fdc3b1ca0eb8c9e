//! Configuration File Module
//!
//! Default observer location from layered TOML files. The system file is read
//! first and the per-user rc file second; keys in a later file replace keys from
//! an earlier one. Missing files on the search path are not an error.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::SunError;
use crate::geo::{self, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, GeoPosition};

// ===================== TYPES =====================

/// Contents of one config file. Both keys are optional.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Observer latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Observer longitude in decimal degrees.
    pub longitude: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("problem with config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("problem with config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("problem with config file '{}'", path.display())]
    Value {
        path: PathBuf,
        #[source]
        source: SunError,
    },
}

impl ConfigFile {
    /// Parse and range-check one file's contents.
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let cfg: ConfigFile = match toml::from_str(text) {
            Ok(cfg) => cfg,
            Err(source) => return Err(ConfigError::Parse { path: path.to_path_buf(), source }),
        };
        cfg.check().map_err(|source| ConfigError::Value { path: path.to_path_buf(), source })?;
        Ok(cfg)
    }

    fn check(&self) -> Result<(), SunError> {
        if let Some(lat) = self.latitude {
            geo::check_latitude(lat)?;
        }
        if let Some(lon) = self.longitude {
            geo::check_longitude(lon)?;
        }
        Ok(())
    }

    /// Layer `over` on top of `self`; keys set in `over` win.
    pub fn merge(self, over: ConfigFile) -> ConfigFile {
        ConfigFile {
            latitude: over.latitude.or(self.latitude),
            longitude: over.longitude.or(self.longitude),
        }
    }

    /// Final observer position: explicit values first, then this file, then the
    /// compiled-in defaults.
    pub fn resolve_position(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<GeoPosition, SunError> {
        GeoPosition::new(
            latitude.or(self.latitude).unwrap_or(DEFAULT_LATITUDE),
            longitude.or(self.longitude).unwrap_or(DEFAULT_LONGITUDE),
        )
    }
}

// ===================== SEARCH PATH =====================

/// Program name used to derive config file names, from argv[0].
pub fn app_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_stem)
        .and_then(OsStr::to_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("suntimes")
        .to_string()
}

/// `/etc/<app>.conf` followed by `<home>/.<app>rc`.
pub fn search_paths(app: &str, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(format!("/etc/{app}.conf"))];
    if let Some(home) = home {
        paths.push(home.join(format!(".{app}rc")));
    }
    paths
}

/// The search path for the running program, using `$HOME`.
pub fn default_search_paths() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    search_paths(&app_name(), home.as_deref())
}

// ===================== LOADING =====================

/// Read one file. `Ok(None)` if it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => ConfigFile::parse(path, &text).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read { path: path.to_path_buf(), source }),
    }
}

/// Read one file that must exist.
pub fn read_required(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let cfg = ConfigFile::parse(path, &text)?;
    debug!(path = %path.display(), ?cfg, "read config file");
    Ok(cfg)
}

/// Read and layer every existing file on `paths`, in order.
pub fn load(paths: &[PathBuf]) -> Result<ConfigFile, ConfigError> {
    let mut merged = ConfigFile::default();
    for path in paths {
        match read_optional(path)? {
            Some(cfg) => {
                debug!(path = %path.display(), ?cfg, "read config file");
                merged = merged.merge(cfg);
            }
            None => debug!(path = %path.display(), "config file not present"),
        }
    }
    Ok(merged)
}

// ===================== TESTS =====================
