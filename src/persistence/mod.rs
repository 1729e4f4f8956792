use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    info,
    warn,
};

use crate::core::{
    config::{
        CATALOGUE_FILE,
        SETTINGS_FILE,
    },
    Catalogue,
    SaynameError,
    Settings,
};

const APP_NAME: &str = "sayname";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            warn!("Could not create {}: {}", app_dir.display(), e);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, path: &Path) -> Result<(), SaynameError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Data saved to: {}", path.display());
    Ok(())
}

/// `Ok(None)` when the file does not exist.
pub fn load_json_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, SaynameError> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    debug!("Data loaded from: {}", path.display());
    Ok(Some(data))
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let path = get_data_file_path(filename);
    match load_json_from::<T>(&path) {
        Ok(data) => data.unwrap_or_default(),
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

pub fn load_settings() -> Settings {
    let settings: Settings = load_json_or_default(SETTINGS_FILE);
    info!("Using API address {}", settings.api_base);
    settings
}

pub fn save_settings(settings: &Settings) -> Result<(), SaynameError> {
    let path = get_data_file_path(SETTINGS_FILE);
    save_json_to(settings, &path)?;
    info!("Settings saved to {}", path.display());
    Ok(())
}

/// A user-supplied `catalogue.json` replaces the built-in examples.
pub fn load_catalogue() -> Catalogue {
    let path = get_data_file_path(CATALOGUE_FILE);
    match load_json_from::<Catalogue>(&path) {
        Ok(Some(catalogue)) => {
            info!("Loaded {} examples from {}", catalogue.len(), path.display());
            catalogue
        }
        Ok(None) => Catalogue::builtin(),
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            Catalogue::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;
    use crate::core::rotation::RotationMode;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sayname-{}-{}", name, process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = scratch_dir("settings");
        let path = dir.join(SETTINGS_FILE);

        let settings = Settings {
            api_base: "https://names.example.org/api".to_string(),
            show_confidence: true,
            rotation: RotationMode::PerAnalysis,
            ..Settings::default()
        };
        save_json_to(&settings, &path).unwrap();

        let loaded: Option<Settings> = load_json_from(&path).unwrap();
        assert_eq!(loaded, Some(settings));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = scratch_dir("missing");
        let loaded: Option<Settings> = load_json_from(&dir.join("nope.json")).unwrap();
        assert!(loaded.is_none());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = scratch_dir("corrupt");
        let path = dir.join(CATALOGUE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let loaded = load_json_from::<Catalogue>(&path);
        assert!(matches!(loaded, Err(SaynameError::Json(_))));
        fs::remove_dir_all(dir).unwrap();
    }
}
