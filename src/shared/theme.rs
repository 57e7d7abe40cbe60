//! Farbschema fuer Wegpunkt-Marker.
//!
//! `ThemeOptions` enthält alle zur Laufzeit änderbaren Farben.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ThemeProvider, WaypointStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ── Wegpunkt-Farben ────────────────────────────────────────────────

/// Home-Position (RGBA: Grün).
pub const WAYPOINT_COLOR_HOME: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Aktuelles Ziel (RGBA: Magenta).
pub const WAYPOINT_COLOR_CURRENT: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Startpunkt (RGBA: Blau).
pub const WAYPOINT_COLOR_TAKEOFF: [f32; 4] = [0.2, 0.7, 1.0, 1.0];
/// Landepunkt (RGBA: Orange).
pub const WAYPOINT_COLOR_LAND: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Loiter (RGBA: Gelb).
pub const WAYPOINT_COLOR_LOITER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Return-to-Launch (RGBA: Rot).
pub const WAYPOINT_COLOR_RTL: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Normaler Wegpunkt (RGBA: Cyan).
pub const WAYPOINT_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Sonstige Kommandos (RGBA: Grau).
pub const WAYPOINT_COLOR_OTHER: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

/// Alle konfigurierbaren Marker-Farben.
/// Wird als `gcs_mission_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeOptions {
    /// Farbe der Home-Position
    pub waypoint_color_home: [f32; 4],
    /// Farbe des aktuellen Ziels
    pub waypoint_color_current: [f32; 4],
    /// Farbe fuer Takeoff
    pub waypoint_color_takeoff: [f32; 4],
    /// Farbe fuer Land
    pub waypoint_color_land: [f32; 4],
    /// Farbe fuer Loiter-Kommandos
    pub waypoint_color_loiter: [f32; 4],
    /// Farbe fuer Return-to-Launch
    #[serde(default = "default_waypoint_color_rtl")]
    pub waypoint_color_rtl: [f32; 4],
    /// Farbe normaler Wegpunkte
    pub waypoint_color_default: [f32; 4],
    /// Farbe sonstiger Kommandos
    #[serde(default = "default_waypoint_color_other")]
    pub waypoint_color_other: [f32; 4],
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            waypoint_color_home: WAYPOINT_COLOR_HOME,
            waypoint_color_current: WAYPOINT_COLOR_CURRENT,
            waypoint_color_takeoff: WAYPOINT_COLOR_TAKEOFF,
            waypoint_color_land: WAYPOINT_COLOR_LAND,
            waypoint_color_loiter: WAYPOINT_COLOR_LOITER,
            waypoint_color_rtl: WAYPOINT_COLOR_RTL,
            waypoint_color_default: WAYPOINT_COLOR_DEFAULT,
            waypoint_color_other: WAYPOINT_COLOR_OTHER,
        }
    }
}

/// Serde-Default für `waypoint_color_rtl` (Abwärtskompatibilität älterer TOML-Dateien).
fn default_waypoint_color_rtl() -> [f32; 4] {
    WAYPOINT_COLOR_RTL
}

/// Serde-Default für `waypoint_color_other` (Abwärtskompatibilität).
fn default_waypoint_color_other() -> [f32; 4] {
    WAYPOINT_COLOR_OTHER
}

impl ThemeOptions {
    /// Liest ein Farbschema aus TOML-Text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Farbschema ist kein gueltiges TOML")
    }

    /// Kategorien, deren Farbe vom Standard-Farbschema abweicht.
    pub fn overridden_styles(&self) -> Vec<WaypointStyle> {
        let defaults = Self::default();
        WaypointStyle::ALL
            .into_iter()
            .filter(|&style| self.waypoint_color(style) != defaults.waypoint_color(style))
            .collect()
    }

    /// Laedt das Farbschema aus einer TOML-Datei.
    ///
    /// Eine fehlende Datei ist kein Fehler; unlesbare oder fehlerhafte Dateien
    /// werden gemeldet. In beiden Faellen gilt das Standard-Farbschema.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Kein Farbschema unter {}, Standardfarben aktiv", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!(
                    "Farbschema {} nicht lesbar ({}), Standardfarben aktiv",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        match Self::from_toml_str(&content) {
            Ok(theme) => {
                let overridden = theme.overridden_styles();
                log::info!(
                    "Farbschema {}: {} von {} Marker-Farben angepasst {:?}",
                    path.display(),
                    overridden.len(),
                    WaypointStyle::ALL.len(),
                    overridden
                );
                theme
            }
            Err(e) => {
                log::warn!("{}: {:#}, Standardfarben aktiv", path.display(), e);
                Self::default()
            }
        }
    }

    /// Schreibt das Farbschema als TOML, z. B. als Vorlage fuer eigene Farben.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Farbschema nicht serialisierbar")?;
        fs::write(path, content)
            .with_context(|| format!("Farbschema nicht schreibbar: {}", path.display()))?;
        log::info!(
            "Farbschema nach {} geschrieben ({} angepasste Farben)",
            path.display(),
            self.overridden_styles().len()
        );
        Ok(())
    }

    /// Standard-Ort des Farbschemas: `gcs_mission_map.toml` neben der Binary,
    /// ersatzweise im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        const FILE_NAME: &str = "gcs_mission_map.toml";
        match std::env::current_exe() {
            Ok(exe) => exe.with_file_name(FILE_NAME),
            Err(e) => {
                log::debug!("Pfad der Binary unbekannt ({}), nutze Arbeitsverzeichnis", e);
                PathBuf::from(FILE_NAME)
            }
        }
    }
}

impl ThemeProvider for ThemeOptions {
    fn waypoint_color(&self, style: WaypointStyle) -> [f32; 4] {
        match style {
            WaypointStyle::Home => self.waypoint_color_home,
            WaypointStyle::CurrentTarget => self.waypoint_color_current,
            WaypointStyle::Takeoff => self.waypoint_color_takeoff,
            WaypointStyle::Land => self.waypoint_color_land,
            WaypointStyle::Loiter => self.waypoint_color_loiter,
            WaypointStyle::ReturnToLaunch => self.waypoint_color_rtl,
            WaypointStyle::Waypoint => self.waypoint_color_default,
            WaypointStyle::Other => self.waypoint_color_other,
        }
    }
}

/// Formatiert eine RGBA-Farbe als `#rrggbbaa`.
pub fn color_to_hex(color: [f32; 4]) -> String {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gcs_mission_map_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let theme = ThemeOptions::load_from_file(&temp_path("does_not_exist.toml"));
        assert_eq!(theme, ThemeOptions::default());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "waypoint_color_home = \"gruen\"").unwrap();
        let theme = ThemeOptions::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(theme, ThemeOptions::default());
    }

    #[test]
    fn save_and_load() {
        let path = temp_path("roundtrip.toml");
        let theme = ThemeOptions {
            waypoint_color_land: [0.5, 0.25, 0.0, 1.0],
            ..ThemeOptions::default()
        };
        theme.save_to_file(&path).unwrap();
        let loaded = ThemeOptions::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn optional_fields_use_serde_defaults() {
        let content = r#"
            waypoint_color_home = [0.0, 1.0, 0.0, 1.0]
            waypoint_color_current = [1.0, 0.0, 1.0, 1.0]
            waypoint_color_takeoff = [0.2, 0.7, 1.0, 1.0]
            waypoint_color_land = [1.0, 0.5, 0.1, 1.0]
            waypoint_color_loiter = [1.0, 1.0, 0.0, 1.0]
            waypoint_color_default = [0.0, 0.8, 1.0, 1.0]
        "#;
        let theme = ThemeOptions::from_toml_str(content).unwrap();
        assert_eq!(theme.waypoint_color_home, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(theme.waypoint_color_rtl, WAYPOINT_COLOR_RTL);
        assert_eq!(theme.waypoint_color_other, WAYPOINT_COLOR_OTHER);
        assert_eq!(theme.overridden_styles(), vec![WaypointStyle::Home]);
    }

    #[test]
    fn default_theme_has_no_overrides() {
        assert!(ThemeOptions::default().overridden_styles().is_empty());
    }

    #[test]
    fn overridden_styles_lists_changed_colors() {
        let theme = ThemeOptions {
            waypoint_color_land: [0.5, 0.25, 0.0, 1.0],
            waypoint_color_other: [0.0, 0.0, 0.0, 1.0],
            ..ThemeOptions::default()
        };
        assert_eq!(
            theme.overridden_styles(),
            vec![WaypointStyle::Land, WaypointStyle::Other]
        );
    }

    #[test]
    fn invalid_toml_reports_context() {
        let err = ThemeOptions::from_toml_str("waypoint_color_home = \"gruen\"")
            .expect_err("ungueltige Farbe");
        assert!(format!("{err:#}").contains("Farbschema ist kein gueltiges TOML"));
    }

    #[test]
    fn save_reports_unwritable_path() {
        let path = temp_path("no_such_dir").join("theme.toml");
        let err = ThemeOptions::default()
            .save_to_file(&path)
            .expect_err("Verzeichnis fehlt");
        assert!(format!("{err:#}").contains("Farbschema nicht schreibbar"));
    }

    #[test]
    fn config_path_names_theme_file() {
        let path = ThemeOptions::config_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("gcs_mission_map.toml")
        );
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(color_to_hex([1.0, 0.0, 1.0, 1.0]), "#ff00ffff");
        assert_eq!(color_to_hex([0.0, 0.8, 1.0, 1.0]), "#00ccffff");
        assert_eq!(color_to_hex([2.0, -1.0, 0.5, 0.0]), "#ff008000");
    }
}
