//! Zuordnung POI-ID → Marker-Handle des Map Hosts.
//!
//! Die Registry spiegelt exakt die aktuell gemounteten Marker. Nur echte
//! Inhaltsänderungen markieren sie als `dirty`; ein erneutes Registrieren
//! mit identischem Handle ist ein No-op und löst keine Neugruppierung aus.

use indexmap::IndexMap;

/// Nicht-besitzende Referenz auf ein vom Map Host gemountetes Marker-Element.
///
/// Der Host vergibt die Werte; die Registry gibt sie nie frei. Gültig ist ein
/// Handle nur zwischen Mount- und Unmount-Meldung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// Baut ein Handle aus dem Host-internen Rohwert.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Host-interner Rohwert.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ergebnis einer Registry-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    /// ID war unbekannt und wurde eingetragen
    Inserted,
    /// ID hatte ein anderes Handle
    Replaced { previous: MarkerHandle },
    /// ID wurde entfernt
    Removed { previous: MarkerHandle },
    /// Kein Netto-Effekt
    Unchanged,
}

impl RegistryChange {
    /// Gibt `true` zurück, wenn sich der Registry-Inhalt geändert hat.
    pub fn is_change(&self) -> bool {
        !matches!(self, RegistryChange::Unchanged)
    }
}

/// Registry aller gemounteten Marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    handles: IndexMap<String, MarkerHandle>,
    dirty: bool,
    revision: u64,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trägt `handle` für `id` ein.
    pub fn register(&mut self, id: &str, handle: MarkerHandle) -> RegistryChange {
        let change = match self.handles.get_mut(id) {
            Some(existing) if *existing == handle => RegistryChange::Unchanged,
            Some(existing) => {
                let previous = *existing;
                *existing = handle;
                RegistryChange::Replaced { previous }
            }
            None => {
                self.handles.insert(id.to_string(), handle);
                RegistryChange::Inserted
            }
        };
        self.note(change);
        change
    }

    /// Entfernt den Eintrag für `id`, falls vorhanden.
    pub fn unregister(&mut self, id: &str) -> RegistryChange {
        let change = match self.handles.shift_remove(id) {
            Some(previous) => RegistryChange::Removed { previous },
            None => RegistryChange::Unchanged,
        };
        self.note(change);
        change
    }

    fn note(&mut self, change: RegistryChange) {
        if change.is_change() {
            self.dirty = true;
            self.revision += 1;
        }
    }

    /// Handle zu einer ID.
    pub fn get(&self, id: &str) -> Option<MarkerHandle> {
        self.handles.get(id).copied()
    }

    /// Gibt `true` zurück, wenn `id` gemountet ist.
    pub fn contains(&self, id: &str) -> bool {
        self.handles.contains_key(id)
    }

    /// Alle Einträge in Mount-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MarkerHandle)> {
        self.handles.iter().map(|(id, h)| (id.as_str(), *h))
    }

    /// Anzahl gemounteter Marker.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Gibt `true` zurück, wenn kein Marker gemountet ist.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Ungeflushte Änderungen vorhanden?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Liest und löscht das Dirty-Flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Zähler aller Netto-Änderungen seit Erstellung.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(raw: u64) -> MarkerHandle {
        MarkerHandle::from_raw(raw)
    }

    #[test]
    fn register_same_handle_twice_is_noop() {
        let mut registry = MarkerRegistry::new();
        assert_eq!(registry.register("A", h(1)), RegistryChange::Inserted);
        assert!(registry.take_dirty());

        assert_eq!(registry.register("A", h(1)), RegistryChange::Unchanged);
        assert!(!registry.is_dirty());
        assert_eq!(registry.revision(), 1);
    }

    #[test]
    fn register_different_handle_replaces() {
        let mut registry = MarkerRegistry::new();
        registry.register("A", h(1));
        assert!(registry.take_dirty());
        let change = registry.register("A", h(2));

        assert_eq!(change, RegistryChange::Replaced { previous: h(1) });
        assert_eq!(registry.get("A"), Some(h(2)));
        assert_eq!(registry.len(), 1);
        assert!(registry.is_dirty());
    }

    #[test]
    fn unregister_unknown_id_is_noop() {
        let mut registry = MarkerRegistry::new();
        assert_eq!(registry.unregister("A"), RegistryChange::Unchanged);
        assert!(!registry.is_dirty());
        assert_eq!(registry.revision(), 0);
    }

    #[test]
    fn final_content_is_net_effect_of_sequence() {
        let mut registry = MarkerRegistry::new();
        registry.register("A", h(1));
        registry.register("B", h(2));
        registry.register("C", h(3));
        registry.unregister("B");
        registry.register("A", h(4));
        registry.unregister("D");
        registry.register("B", h(5));
        registry.unregister("C");

        let entries: Vec<(&str, MarkerHandle)> = registry.iter().collect();
        assert_eq!(entries, vec![("A", h(4)), ("B", h(5))]);
        assert!(!registry.contains("C"));
        assert_eq!(registry.revision(), 7);
    }
}
