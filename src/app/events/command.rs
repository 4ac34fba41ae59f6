use crate::core::{Coordinate, GeoBounds, HostId, MarkerHandle, PointOfInterest, Viewport};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Clusterer an Host-Instanz binden (lazy, bzw. neu bei Host-Wechsel)
    AttachHost { host: HostId, viewport: Viewport },
    /// Viewport übernehmen
    SetViewport { viewport: Viewport },
    /// Gruppierung sofort neu berechnen
    RecomputeClusters,
    /// Marker-Handle eintragen
    RegisterMarker { id: String, handle: MarkerHandle },
    /// Marker-Handle austragen
    UnregisterMarker { id: String },
    /// POI selektieren (ersetzt vorherige Selektion)
    SelectPoi { poi: PointOfInterest },
    /// Selektion und Highlight aufheben
    DismissSelection,
    /// Host-Kamera auf Koordinate schwenken (fire-and-forget)
    PanTo { target: Coordinate },
    /// Host-Kamera auf Ausschnitt zoomen (fire-and-forget)
    FitBounds { bounds: GeoBounds },
}
