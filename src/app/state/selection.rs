use crate::core::{Coordinate, PointOfInterest};

/// Auswahlbezogener Anwendungszustand.
///
/// Höchstens ein POI ist selektiert. `highlight_center` ist genau dann gesetzt,
/// wenn ein POI selektiert ist, und entspricht dann dessen Koordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<PointOfInterest>,
    highlight_center: Option<Coordinate>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand (Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert `poi`; eine bestehende Selektion wird ersetzt.
    pub fn select(&mut self, poi: PointOfInterest) {
        self.highlight_center = Some(poi.coordinate);
        self.selected = Some(poi);
    }

    /// Hebt die Selektion auf. Gibt zurück, ob vorher etwas selektiert war.
    pub fn dismiss(&mut self) -> bool {
        self.highlight_center = None;
        self.selected.take().is_some()
    }

    /// Aktuell selektierter POI.
    pub fn selected(&self) -> Option<&PointOfInterest> {
        self.selected.as_ref()
    }

    /// Mittelpunkt des Highlight-Kreises.
    pub fn highlight_center(&self) -> Option<Coordinate> {
        self.highlight_center
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }

    /// Gibt `true` zurück, wenn `id` der selektierte POI ist.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|poi| poi.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str, lat: f64, lng: f64) -> PointOfInterest {
        PointOfInterest::new(id, Coordinate::new(lat, lng))
    }

    #[test]
    fn select_sets_highlight_to_poi_coordinate() {
        let mut selection = SelectionState::new();
        selection.select(poi("A", 0.0, 0.0));
        selection.select(poi("B", 1.0, 1.0));

        assert_eq!(selection.selected().map(|p| p.id.as_str()), Some("B"));
        assert_eq!(selection.highlight_center(), Some(Coordinate::new(1.0, 1.0)));
        assert!(selection.is_selected("B"));
        assert!(!selection.is_selected("A"));
    }

    #[test]
    fn dismiss_twice_equals_dismiss_once() {
        let mut once = SelectionState::new();
        once.select(poi("A", 0.0, 0.0));
        let mut twice = once.clone();

        assert!(once.dismiss());
        assert!(twice.dismiss());
        assert!(!twice.dismiss());

        assert_eq!(once, twice);
        assert!(twice.is_idle());
        assert_eq!(twice.highlight_center(), None);
    }
}
