//! Zentrale Konfiguration der POI-Karte.
//!
//! `MapOptions` enthält Zugangsdaten, Kartenstil und alle Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ClusterOptions, Coordinate};
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mitte der Karte (Sydney CBD).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(-33.860664, 151.208138);
/// Start-Zoom.
pub const DEFAULT_ZOOM: f64 = 13.0;
/// Minimaler Zoom.
pub const ZOOM_MIN: f64 = 2.0;
/// Maximaler Zoom.
pub const ZOOM_MAX: f64 = 20.0;
/// Zoom-Stufen pro Mausrad-Schritt.
pub const SCROLL_ZOOM_STEP: f64 = 0.5;

// ── Clustering ──────────────────────────────────────────────────────

/// Gruppierungsradius in Screen-Pixeln.
pub const CLUSTER_RADIUS_PX: f64 = 60.0;
/// Mindestanzahl Marker pro Cluster.
pub const CLUSTER_MIN_POINTS: usize = 2;
/// Oberhalb dieser Zoom-Stufe wird nicht mehr gruppiert.
pub const CLUSTER_MAX_ZOOM: u8 = 16;
/// Rand in Pixeln beim Hineinzoomen auf einen Cluster.
pub const CLUSTER_FIT_PADDING_PX: f64 = 40.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Pick-Radius für Marker und Cluster in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 14.0;
/// Pin-Hintergrund (RGBA: Gelb #FBBC04).
pub const PIN_BACKGROUND: [f32; 4] = [0.984, 0.737, 0.016, 1.0];
/// Pin-Glyphe (RGBA: Schwarz).
pub const PIN_GLYPH: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Pin-Rand (RGBA: Schwarz).
pub const PIN_BORDER: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Füllfarbe der Cluster-Icons (RGBA: Rot).
pub const CLUSTER_COLOR: [f32; 4] = [0.85, 0.2, 0.15, 1.0];

// ── Highlight-Kreis ────────────────────────────────────────────────

/// Radius des Highlight-Kreises in Metern.
pub const HIGHLIGHT_RADIUS_M: f64 = 800.0;
/// Randfarbe (RGBA: #0c4cb3).
pub const HIGHLIGHT_STROKE_COLOR: [f32; 4] = [0.047, 0.298, 0.702, 1.0];
/// Randstärke in Pixeln.
pub const HIGHLIGHT_STROKE_WIDTH: f32 = 3.0;
/// Füllfarbe (RGBA: #3b82f6, 30 % deckend).
pub const HIGHLIGHT_FILL_COLOR: [f32; 4] = [0.231, 0.510, 0.965, 0.3];

/// Umgebungsvariable für den Zugangsschlüssel des Kartendienstes.
pub const ENV_API_KEY: &str = "POI_MAP_API_KEY";
/// Umgebungsvariable für die Kartenstil-ID.
pub const ENV_STYLE_ID: &str = "POI_MAP_STYLE_ID";

/// Alle Laufzeit-Optionen der Karte.
/// Wird als `poi_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapOptions {
    // ── Kartendienst ────────────────────────────────────────────
    /// Zugangsschlüssel des Kartendienstes (wird nicht geprüft)
    #[serde(default)]
    pub api_key: String,
    /// Kartenstil-ID
    #[serde(default)]
    pub map_style_id: String,

    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Mitte
    pub default_center: Coordinate,
    /// Start-Zoom
    pub default_zoom: f64,
    /// Minimaler Zoom
    pub zoom_min: f64,
    /// Maximaler Zoom
    pub zoom_max: f64,
    /// Zoom-Stufen pro Mausrad-Schritt
    pub scroll_zoom_step: f64,

    // ── Clustering ──────────────────────────────────────────────
    /// Gruppierungsradius in Screen-Pixeln
    pub cluster_radius_px: f64,
    /// Mindestanzahl Marker pro Cluster
    pub cluster_min_points: usize,
    /// Oberhalb dieser Zoom-Stufe keine Cluster
    pub cluster_max_zoom: u8,
    /// Rand beim Hineinzoomen auf einen Cluster
    #[serde(default = "default_cluster_fit_padding_px")]
    pub cluster_fit_padding_px: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Pick-Radius in Screen-Pixeln
    pub marker_pick_radius_px: f32,
    /// Pin-Hintergrund
    pub pin_background: [f32; 4],
    /// Pin-Glyphe
    pub pin_glyph: [f32; 4],
    /// Pin-Rand
    pub pin_border: [f32; 4],
    /// Füllfarbe der Cluster-Icons
    pub cluster_color: [f32; 4],

    // ── Highlight ───────────────────────────────────────────────
    /// Radius in Metern
    pub highlight_radius_m: f64,
    /// Randfarbe
    pub highlight_stroke_color: [f32; 4],
    /// Randstärke in Pixeln
    pub highlight_stroke_width: f32,
    /// Füllfarbe
    pub highlight_fill_color: [f32; 4],
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            map_style_id: String::new(),

            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            cluster_radius_px: CLUSTER_RADIUS_PX,
            cluster_min_points: CLUSTER_MIN_POINTS,
            cluster_max_zoom: CLUSTER_MAX_ZOOM,
            cluster_fit_padding_px: CLUSTER_FIT_PADDING_PX,

            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
            pin_background: PIN_BACKGROUND,
            pin_glyph: PIN_GLYPH,
            pin_border: PIN_BORDER,
            cluster_color: CLUSTER_COLOR,

            highlight_radius_m: HIGHLIGHT_RADIUS_M,
            highlight_stroke_color: HIGHLIGHT_STROKE_COLOR,
            highlight_stroke_width: HIGHLIGHT_STROKE_WIDTH,
            highlight_fill_color: HIGHLIGHT_FILL_COLOR,
        }
    }
}

/// Serde-Default für `cluster_fit_padding_px` (Abwärtskompatibilität).
fn default_cluster_fit_padding_px() -> f64 {
    CLUSTER_FIT_PADDING_PX
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("poi_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("poi_map.toml")
    }

    /// Überschreibt Zugangsschlüssel und Stil-ID mit gesetzten Werten.
    ///
    /// `lookup` liefert den Wert einer Variablen; leere Werte werden ignoriert.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(style) = lookup(ENV_STYLE_ID).filter(|v| !v.is_empty()) {
            self.map_style_id = style;
        }
    }

    /// Übernimmt Overrides aus den Prozess-Umgebungsvariablen.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Clustering-Parameter für den Clusterer.
    pub fn cluster_options(&self) -> ClusterOptions {
        ClusterOptions {
            radius_px: self.cluster_radius_px,
            min_points: self.cluster_min_points,
            max_zoom: self.cluster_max_zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_credentials_and_camera() {
        let mut options = MapOptions::default();
        options.api_key = "abc".to_string();
        options.map_style_id = "demo-style".to_string();
        options.default_zoom = 11.5;

        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed: MapOptions = toml::from_str(&text).expect("Deserialisierung");

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::path::Path::new("/nonexistent/dir/poi_map.toml");
        assert_eq!(MapOptions::load_from_file(path), MapOptions::default());
    }

    #[test]
    fn overrides_replace_only_non_empty_values() {
        let mut options = MapOptions {
            map_style_id: "file-style".to_string(),
            ..MapOptions::default()
        };

        options.apply_overrides(|name| match name {
            ENV_API_KEY => Some("env-key".to_string()),
            ENV_STYLE_ID => Some(String::new()),
            _ => None,
        });

        assert_eq!(options.api_key, "env-key");
        assert_eq!(options.map_style_id, "file-style");
    }

    #[test]
    fn cluster_options_follow_map_options() {
        let options = MapOptions {
            cluster_radius_px: 80.0,
            cluster_min_points: 3,
            cluster_max_zoom: 14,
            ..MapOptions::default()
        };
        let cluster = options.cluster_options();
        assert_eq!(cluster.radius_px, 80.0);
        assert_eq!(cluster.min_points, 3);
        assert_eq!(cluster.max_zoom, 14);
    }
}
