//! Use-Cases für den Clusterer-Lebenszyklus.

use crate::app::AppState;
use crate::core::{Clusterer, HostId, Viewport};

/// Bindet den Clusterer an eine Host-Instanz.
///
/// Beim ersten Host wird der Clusterer erzeugt, bei einer anderen Host-Instanz
/// neu erzeugt. Derselbe Host ändert nichts.
pub fn attach_host(state: &mut AppState, host: HostId, viewport: Viewport) {
    if state
        .clusterer
        .as_ref()
        .is_some_and(|c| c.host_id() == host)
    {
        log::debug!("Host {:?} bereits angebunden", host);
        return;
    }

    if let Some(previous) = state.view.host {
        log::info!("Map Host gewechselt ({:?} → {:?})", previous, host);
    } else {
        log::info!("Maps API has loaded (Host {:?})", host);
    }

    state.view.host = Some(host);
    state.view.viewport = Some(viewport);
    state.clusterer = Some(Clusterer::new(
        host,
        state.options.cluster_options(),
        viewport,
    ));

    if !state.markers.is_empty() {
        recompute(state);
    }
}

/// Verwirft die Gruppierung und berechnet sie aus der Registry neu.
///
/// Ohne Map Host ein No-op.
pub fn recompute(state: &mut AppState) {
    state.markers.take_dirty();

    let points = state.marker_points();
    let Some(clusterer) = state.clusterer.as_mut() else {
        log::debug!("Clustering übersprungen: kein Map Host verfügbar");
        return;
    };
    log::debug!(
        "Neugruppierung für Registry-Revision {}",
        state.markers.revision()
    );
    clusterer.recompute(&points);
}

/// Berechnet neu, falls die Registry seit dem letzten Lauf geändert wurde.
///
/// Gibt zurück, ob ein Neuberechnungs-Auftrag vorlag.
pub fn flush_if_dirty(state: &mut AppState) -> bool {
    if !state.markers.is_dirty() {
        return false;
    }
    recompute(state);
    true
}
