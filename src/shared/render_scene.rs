//! Render-Szene als expliziter Übergabevertrag zwischen App und Map Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::MapOptions;
use crate::core::{Coordinate, GeoBounds, MarkerHandle};

/// Einzelner Marker (Pin) auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerVisual {
    /// POI-ID
    pub id: String,
    /// Host-Handle des Markers
    pub handle: MarkerHandle,
    /// Position
    pub position: Coordinate,
    /// Gehört zum selektierten POI
    pub selected: bool,
}

/// Cluster-Icon für mehrere nahe Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterVisual {
    /// Anzahl gruppierter Marker
    pub count: usize,
    /// Darstellungsposition
    pub position: Coordinate,
    /// Ausdehnung aller Mitglieder (Ziel beim Anklicken)
    pub bounds: GeoBounds,
}

/// Ein Element der Szene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    /// Einzelmarker
    Marker(MarkerVisual),
    /// Gruppe
    Cluster(ClusterVisual),
}

/// Kreis-Overlay um den selektierten POI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightCircle {
    /// Mittelpunkt
    pub center: Coordinate,
    /// Radius in Metern
    pub radius_m: f64,
    /// Randfarbe (RGBA)
    pub stroke_color: [f32; 4],
    /// Randstärke in Pixeln
    pub stroke_width: f32,
    /// Füllfarbe (RGBA)
    pub fill_color: [f32; 4],
}

/// Info-Popup am selektierten POI.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Ankerposition
    pub anchor: Coordinate,
    /// Titel (POI-ID)
    pub title: String,
    /// Koordinaten-Text
    pub body: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Marker und Cluster
    pub items: Vec<SceneItem>,
    /// Highlight-Kreis (nur bei aktiver Selektion)
    pub highlight: Option<HighlightCircle>,
    /// Popup (nur bei aktiver Selektion)
    pub popup: Option<PopupContent>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: MapOptions,
}

impl RenderScene {
    /// Anzahl einzeln dargestellter Marker.
    pub fn marker_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, SceneItem::Marker(_)))
            .count()
    }

    /// Anzahl Cluster-Icons.
    pub fn cluster_count(&self) -> usize {
        self.items.len() - self.marker_count()
    }
}
