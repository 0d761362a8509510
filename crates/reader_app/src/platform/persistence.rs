use std::fs;
use std::path::{Path, PathBuf};

use reader_core::{PreferenceSnapshot, ViewMode, DEFAULT_ZOOM};
use reader_engine::ArtifactWriter;
use reader_logging::{reader_error, reader_warn};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".reader_prefs.ron";

/// On-disk shape of the viewer preferences. Zoom stays stringified, the
/// way the original store kept it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPrefs {
    reader_view: String,
    reader_zoom: String,
}

pub(crate) fn prefs_path() -> PathBuf {
    PathBuf::from(PREFS_FILENAME)
}

/// Reads preferences, falling back to defaults (`image`, 100) when the
/// file is absent, unreadable or malformed. Never fails.
pub(crate) fn load_preferences(path: &Path) -> PreferenceSnapshot {
    let defaults = PreferenceSnapshot {
        view: ViewMode::Image,
        zoom: DEFAULT_ZOOM,
    };

    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return defaults;
        }
        Err(err) => {
            reader_warn!("Failed to read preferences from {:?}: {}", path, err);
            return defaults;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            reader_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return defaults;
        }
    };

    PreferenceSnapshot {
        view: ViewMode::parse(&prefs.reader_view).unwrap_or(defaults.view),
        zoom: prefs.reader_zoom.parse().unwrap_or(defaults.zoom),
    }
}

/// Writes both preferences. Failures are logged and swallowed; losing a
/// preference write never interrupts reading.
pub(crate) fn save_preferences(path: &Path, view: ViewMode, zoom: u16) {
    let prefs = PersistedPrefs {
        reader_view: view.as_str().to_string(),
        reader_zoom: zoom.to_string(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            reader_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
        reader_error!("Invalid preferences path {:?}", path);
        return;
    };

    let writer = ArtifactWriter::new(dir.to_path_buf());
    if let Err(err) = writer.write(filename, &content) {
        reader_error!("Failed to write preferences to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn preferences_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".reader_prefs.ron");

        save_preferences(&path, ViewMode::Text, 120);
        let prefs = load_preferences(&path);

        assert_eq!(prefs.view, ViewMode::Text);
        assert_eq!(prefs.zoom, 120);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let prefs = load_preferences(&temp.path().join("absent.ron"));

        assert_eq!(prefs.view, ViewMode::Image);
        assert_eq!(prefs.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".reader_prefs.ron");
        fs::write(&path, "(not: valid").unwrap();

        let prefs = load_preferences(&path);
        assert_eq!(prefs.view, ViewMode::Image);
        assert_eq!(prefs.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn unknown_view_name_falls_back_to_image() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".reader_prefs.ron");
        fs::write(
            &path,
            "(\n    reader_view: \"split\",\n    reader_zoom: \"110\",\n)",
        )
        .unwrap();

        let prefs = load_preferences(&path);
        assert_eq!(prefs.view, ViewMode::Image);
        assert_eq!(prefs.zoom, 110);
    }
}
