//! Application Controller für zentrale Event-Verarbeitung.

use super::host::{self, MapHost};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-/UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen einzelnen Intent als eigenen Batch.
    ///
    /// Jeder Aufruf schließt mit eigenem Flush ab: Marker-Meldungen, die
    /// einzeln zugestellt werden, lösen je eine Neugruppierung aus. Für
    /// zusammengefasste Neugruppierung `handle_intents` mit dem ganzen Batch
    /// aufrufen.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        self.handle_intents(state, [intent])
    }

    /// Verarbeitet alle Intents eines Event-Batches (z.B. eines Frames).
    ///
    /// Registry-Änderungen innerhalb des Batches lösen am Ende genau eine
    /// Neugruppierung aus.
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: impl IntoIterator<Item = AppIntent>,
    ) -> anyhow::Result<()> {
        let mut executed = 0usize;
        for intent in intents {
            let commands = self.map_intent_to_commands(state, intent);
            for command in commands {
                self.handle_command(state, command)?;
                executed += 1;
            }
        }

        if let Some(last) = state.command_log.entries().last().filter(|_| executed > 0) {
            log::debug!("Batch verarbeitet: {} Commands, zuletzt {:?}", executed, last);
        }

        super::handlers::markers::flush(state);
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Map Host & Viewport ===
            AppCommand::AttachHost { host, viewport } => {
                handlers::view::attach_host(state, host, viewport)
            }
            AppCommand::SetViewport { viewport } => handlers::view::set_viewport(state, viewport),
            AppCommand::RecomputeClusters => handlers::view::recompute_clusters(state),
            AppCommand::PanTo { target } => handlers::view::pan_to(state, target),
            AppCommand::FitBounds { bounds } => handlers::view::fit_bounds(state, bounds),

            // === Marker ===
            AppCommand::RegisterMarker { id, handle } => {
                handlers::markers::register(state, &id, handle)
            }
            AppCommand::UnregisterMarker { id } => handlers::markers::unregister(state, &id),

            // === Selektion ===
            AppCommand::SelectPoi { poi } => handlers::selection::select(state, poi),
            AppCommand::DismissSelection => handlers::selection::dismiss(state),
        }

        Ok(())
    }

    /// Liefert alle angesammelten Kamera-Anfragen an den Host aus.
    pub fn dispatch_host_requests(&mut self, state: &mut AppState, host: &mut dyn MapHost) -> usize {
        let requests = std::mem::take(&mut state.host_requests);
        host::deliver(requests, host)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
