//! Configuration management.

use crate::models::SourceConstraints;
use serde::Deserialize;

/// Main configuration for geoquery.
#[derive(Debug, Clone)]
pub struct GeoqueryConfig {
    /// Default trailing window in days when a query carries no temporal cue.
    pub default_days_back: u32,
    /// Default minimum-magnitude threshold.
    pub default_magnitude: f64,
    /// Default search radius in kilometers, applied when a location is
    /// present but the query names no radius.
    pub default_radius_km: u32,
    /// Padding in degrees around geocoded centroids whose feature class
    /// carries no padding of its own.
    pub default_padding_degrees: f64,
    /// How many geocoding candidates to request per lookup.
    pub geocoder_results: usize,
    /// Validity constraints of the backing archive.
    pub constraints: SourceConstraints,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Normalizer defaults section.
    pub defaults: Option<ConfigFileDefaults>,
    /// Boundary resolution section.
    pub boundary: Option<ConfigFileBoundary>,
    /// Archive constraints section.
    pub archive: Option<ConfigFileArchive>,
}

/// Defaults section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileDefaults {
    /// Trailing window in days.
    pub days_back: Option<u32>,
    /// Minimum-magnitude threshold.
    pub magnitude: Option<f64>,
    /// Search radius in kilometers.
    pub radius_km: Option<u32>,
}

/// Boundary section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileBoundary {
    /// Centroid padding in degrees.
    pub padding_degrees: Option<f64>,
    /// Geocoding candidates per lookup.
    pub geocoder_results: Option<usize>,
}

/// Archive section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileArchive {
    /// Trailing embargo window in days.
    pub embargo_days: Option<u32>,
    /// Earliest supported year.
    pub min_year: Option<i32>,
}

impl Default for GeoqueryConfig {
    fn default() -> Self {
        Self {
            default_days_back: 30,
            default_magnitude: 2.5,
            default_radius_km: 500,
            default_padding_degrees: 1.0,
            geocoder_results: 1,
            constraints: SourceConstraints::historical_archive(),
        }
    }
}

impl GeoqueryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/geoquery/` on macOS)
    /// 2. XDG config dir (`~/.config/geoquery/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs.config_dir().join("geoquery").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("geoquery")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `GeoqueryConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(defaults) = file.defaults {
            if let Some(v) = defaults.days_back {
                config.default_days_back = v;
            }
            if let Some(v) = defaults.magnitude {
                config.default_magnitude = v;
            }
            if let Some(v) = defaults.radius_km {
                config.default_radius_km = v;
            }
        }
        if let Some(boundary) = file.boundary {
            if let Some(v) = boundary.padding_degrees {
                config.default_padding_degrees = v;
            }
            if let Some(v) = boundary.geocoder_results {
                config.geocoder_results = v;
            }
        }
        if let Some(archive) = file.archive {
            let embargo = archive
                .embargo_days
                .unwrap_or(config.constraints.embargo_days);
            let min_year = archive.min_year.unwrap_or(config.constraints.min_year);
            config.constraints = SourceConstraints::new(embargo, min_year);
        }

        config
    }

    /// Sets the default trailing window.
    #[must_use]
    pub const fn with_days_back(mut self, days: u32) -> Self {
        self.default_days_back = days;
        self
    }

    /// Sets the default magnitude threshold.
    #[must_use]
    pub const fn with_magnitude(mut self, threshold: f64) -> Self {
        self.default_magnitude = threshold;
        self
    }

    /// Sets the default search radius.
    #[must_use]
    pub const fn with_radius_km(mut self, radius: u32) -> Self {
        self.default_radius_km = radius;
        self
    }

    /// Sets the archive validity constraints.
    #[must_use]
    pub const fn with_constraints(mut self, constraints: SourceConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}
