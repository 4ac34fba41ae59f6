//! Use-Cases für Marker-Mount/-Unmount.
//!
//! Registry-Änderungen setzen nur das Dirty-Flag. Die Neugruppierung läuft
//! gesammelt am Ende eines Event-Batches (siehe `clusters::flush_if_dirty`).

use crate::app::AppState;
use crate::core::{MarkerHandle, RegistryChange};

/// Trägt das Handle eines gemounteten Markers ein.
pub fn register_marker(state: &mut AppState, id: &str, handle: MarkerHandle) -> RegistryChange {
    let change = state.markers.register(id, handle);
    match change {
        RegistryChange::Inserted => {
            log::debug!("Marker '{}' gemountet (Handle {})", id, handle.raw());
        }
        RegistryChange::Replaced { previous } => {
            log::debug!(
                "Marker '{}' neu gemountet (Handle {} → {})",
                id,
                previous.raw(),
                handle.raw()
            );
        }
        RegistryChange::Removed { .. } | RegistryChange::Unchanged => {}
    }
    change
}

/// Trägt einen entfernten Marker aus.
pub fn unregister_marker(state: &mut AppState, id: &str) -> RegistryChange {
    let change = state.markers.unregister(id);
    if change.is_change() {
        log::debug!("Marker '{}' entfernt", id);
    }
    change
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remount_with_same_handle_keeps_registry_clean() {
        let mut state = AppState::default();
        let handle = MarkerHandle::from_raw(7);

        assert_eq!(register_marker(&mut state, "operaHouse", handle), RegistryChange::Inserted);
        assert!(state.markers.take_dirty());

        assert_eq!(register_marker(&mut state, "operaHouse", handle), RegistryChange::Unchanged);
        assert!(!state.markers.is_dirty());
    }

    #[test]
    fn unmount_unknown_marker_is_noop() {
        let mut state = AppState::default();

        assert_eq!(unregister_marker(&mut state, "operaHouse"), RegistryChange::Unchanged);
        assert!(state.markers.is_empty());
        assert!(!state.markers.is_dirty());
    }
}
