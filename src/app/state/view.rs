use crate::core::{HostId, Viewport};

/// View-bezogener Anwendungszustand (was der Map Host zuletzt gemeldet hat)
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuell angebundene Host-Instanz
    pub host: Option<HostId>,
    /// Zuletzt gemeldeter Viewport
    pub viewport: Option<Viewport>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (noch kein Host).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn ein Map Host angebunden ist.
    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_host_follows_attached_instance() {
        let mut view = ViewState::new();
        assert!(!view.has_host());

        view.host = Some(HostId(3));
        assert!(view.has_host());
    }
}
