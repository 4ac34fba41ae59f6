use crate::app::host::HostRequest;
use crate::app::CommandLog;
use crate::core::{Clusterer, MarkerPoint, MarkerRegistry, PoiStore};
use crate::shared::MapOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Feste POI-Liste (nach dem Start unverändert)
    pub pois: PoiStore,
    /// Gemountete Marker
    pub markers: MarkerRegistry,
    /// Clusterer (erst vorhanden, sobald ein Map Host verfügbar ist)
    pub clusterer: Option<Clusterer>,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Noch nicht an den Host ausgelieferte Kamera-Anfragen
    pub host_requests: Vec<HostRequest>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Zugangsdaten, Farben, Clustering)
    pub options: MapOptions,
}

impl AppState {
    /// Erstellt den App-State mit expliziter Konfiguration und POI-Liste.
    pub fn new(options: MapOptions, pois: PoiStore) -> Self {
        Self {
            pois,
            markers: MarkerRegistry::new(),
            clusterer: None,
            selection: SelectionState::new(),
            view: ViewState::new(),
            host_requests: Vec::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gemountete Marker mit Position, als Eingabe für den Clusterer.
    ///
    /// IDs ohne POI im Store werden übersprungen.
    pub fn marker_points(&self) -> Vec<MarkerPoint> {
        self.markers
            .iter()
            .filter_map(|(id, handle)| {
                self.pois.get(id).map(|poi| MarkerPoint {
                    id: id.to_string(),
                    handle,
                    position: poi.coordinate,
                })
            })
            .collect()
    }

    /// Anzahl bisheriger Cluster-Neuberechnungen (0 ohne Host).
    pub fn cluster_recompute_count(&self) -> u64 {
        self.clusterer.as_ref().map_or(0, |c| c.recompute_count())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MapOptions::default(), PoiStore::sydney_demo())
    }
}
