//! Mapping von Host-/UI-Intents auf mutierende App-Commands.

use super::use_cases;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HostAttached { host, viewport } => {
            vec![AppCommand::AttachHost { host, viewport }]
        }
        AppIntent::ViewportChanged { viewport } => {
            if use_cases::viewport::is_significant(state, &viewport) {
                vec![
                    AppCommand::SetViewport { viewport },
                    AppCommand::RecomputeClusters,
                ]
            } else {
                vec![AppCommand::SetViewport { viewport }]
            }
        }
        AppIntent::MarkerRefChanged { id, handle } => {
            if state.pois.get(&id).is_none() {
                log::warn!("Marker-Meldung für unbekannten POI '{}' ignoriert", id);
                return Vec::new();
            }
            match handle {
                Some(handle) => vec![AppCommand::RegisterMarker { id, handle }],
                None => vec![AppCommand::UnregisterMarker { id }],
            }
        }
        AppIntent::MarkerClicked { id } => match state.pois.get(&id) {
            Some(poi) => vec![
                AppCommand::SelectPoi { poi: poi.clone() },
                AppCommand::PanTo {
                    target: poi.coordinate,
                },
            ],
            None => {
                log::warn!("Klick auf unbekannten POI '{}' ignoriert", id);
                Vec::new()
            }
        },
        AppIntent::ClusterClicked { bounds } => vec![AppCommand::FitBounds { bounds }],
        AppIntent::PopupDismissed => vec![AppCommand::DismissSelection],
        AppIntent::RecenterRequested { target } => vec![AppCommand::PanTo { target }],
    }
}
