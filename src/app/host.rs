//! Schnittstelle zum Map Host (Kamera, Rendering-Fläche).
//!
//! Kamera-Anfragen werden im `AppState` gesammelt und vom Host-Loop
//! ausgeliefert. Es gibt keine Bestätigung und keinen Retry.

use crate::core::{Coordinate, GeoBounds, HostId};

/// Kamera-Anfrage an den Map Host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostRequest {
    /// Kamera auf Koordinate schwenken
    PanTo(Coordinate),
    /// Kamera so einstellen, dass der Ausschnitt sichtbar ist
    FitBounds(GeoBounds),
}

/// Fähigkeiten, die der Core vom Map Host benötigt.
pub trait MapHost {
    /// Identität der Host-Instanz.
    fn host_id(&self) -> HostId;

    /// Schwenkt die Kamera auf `target`. Fire-and-forget.
    fn pan_to(&mut self, target: Coordinate);

    /// Zoomt auf `bounds`. Fire-and-forget.
    fn fit_bounds(&mut self, bounds: GeoBounds);
}

/// Liefert `requests` in Reihenfolge an `host` aus.
pub fn deliver(requests: impl IntoIterator<Item = HostRequest>, host: &mut dyn MapHost) -> usize {
    let mut delivered = 0;
    for request in requests {
        match request {
            HostRequest::PanTo(target) => host.pan_to(target),
            HostRequest::FitBounds(bounds) => host.fit_bounds(bounds),
        }
        delivered += 1;
    }
    delivered
}
