use std::time::Duration;

use reqwest::Url;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    rotation::RotationMode,
    SaynameError,
};

/// API base baked in at build time, e.g. `SAYNAME_API_URL=https://names.example.org/api`.
pub const DEFAULT_API_BASE: &str = match option_env!("SAYNAME_API_URL") {
    Some(base) => base,
    None => "/api",
};

/// Origin a relative API base is resolved against.
pub const LOCAL_ORIGIN: &str = "http://localhost:8000";

pub const ANALYSE_TIMEOUT: Duration = Duration::from_secs(30);

pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

pub const SETTINGS_FILE: &str = "settings.json";
pub const CATALOGUE_FILE: &str = "catalogue.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub analyse: Url,
    pub health: Url,
}

impl Endpoints {
    pub fn resolve(api_base: &str) -> Result<Self, SaynameError> {
        let invalid = |reason: String| SaynameError::InvalidApiBase {
            address: api_base.to_string(),
            reason,
        };

        let base = api_base.trim();
        if base.is_empty() {
            return Err(invalid("address is empty".to_string()));
        }

        let raw = format!("{}/analyse", base.trim_end_matches('/'));
        let analyse = if raw.starts_with('/') {
            Url::parse(LOCAL_ORIGIN).and_then(|origin| origin.join(&raw))
        } else {
            Url::parse(&raw)
        }
        .map_err(|e| invalid(e.to_string()))?;

        if !matches!(analyse.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", analyse.scheme())));
        }

        let health = analyse.join("/health").map_err(|e| invalid(e.to_string()))?;

        Ok(Self { analyse, health })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogueView {
    #[default]
    Full,
    Featured,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub show_confidence: bool,
    pub rotation: RotationMode,
    pub catalogue_view: CatalogueView,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            show_confidence: false,
            rotation: RotationMode::default(),
            catalogue_view: CatalogueView::default(),
            dark_mode: true,
        }
    }
}

impl Settings {
    pub fn endpoints(&self) -> Result<Endpoints, SaynameError> {
        Endpoints::resolve(&self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_base_resolves_against_local_origin() {
        let endpoints = Endpoints::resolve("/api").unwrap();
        assert_eq!(endpoints.analyse.as_str(), "http://localhost:8000/api/analyse");
        assert_eq!(endpoints.health.as_str(), "http://localhost:8000/health");

        let endpoints = Endpoints::resolve("/api/").unwrap();
        assert_eq!(endpoints.analyse.as_str(), "http://localhost:8000/api/analyse");
    }

    #[test]
    fn test_absolute_base() {
        let endpoints = Endpoints::resolve("https://names.example.org/api").unwrap();
        assert_eq!(endpoints.analyse.as_str(), "https://names.example.org/api/analyse");
        assert_eq!(endpoints.health.as_str(), "https://names.example.org/health");
    }

    #[test]
    fn test_invalid_bases() {
        assert!(Endpoints::resolve("").is_err());
        assert!(Endpoints::resolve("   ").is_err());
        assert!(Endpoints::resolve("ftp://example.org/api").is_err());
        assert!(Endpoints::resolve("not a url").is_err());
    }

    #[test]
    fn test_settings_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"show_confidence": true}"#).unwrap();
        assert!(settings.show_confidence);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.rotation, RotationMode::default());
        assert_eq!(settings.catalogue_view, CatalogueView::Full);
    }
}
