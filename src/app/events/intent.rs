use crate::core::{Coordinate, GeoBounds, HostId, MarkerHandle, Viewport};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Map Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Map Host ist verfügbar (erstmals oder als neue Instanz)
    HostAttached { host: HostId, viewport: Viewport },
    /// Kamera/Viewport des Hosts hat sich geändert
    ViewportChanged { viewport: Viewport },
    /// Marker-Element wurde gemountet (`Some`) oder entfernt (`None`)
    MarkerRefChanged {
        id: String,
        handle: Option<MarkerHandle>,
    },
    /// Marker wurde angeklickt
    MarkerClicked { id: String },
    /// Cluster-Icon wurde angeklickt
    ClusterClicked { bounds: GeoBounds },
    /// Info-Popup wurde geschlossen
    PopupDismissed,
    /// Kamera auf einen Punkt zentrieren (z.B. Status-Bar „Start“)
    RecenterRequested { target: Coordinate },
}
