//! Points of Interest und der unveränderliche POI-Store.

use super::geo::Coordinate;
use indexmap::IndexMap;

/// Ein benannter Punkt auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    /// Eindeutige, stabile ID
    pub id: String,
    /// Position
    pub coordinate: Coordinate,
}

impl PointOfInterest {
    /// Erstellt einen neuen POI.
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
        }
    }
}

/// Geordnete, nach dem Start nicht mehr veränderte Liste aller POIs.
#[derive(Debug, Clone, Default)]
pub struct PoiStore {
    pois: IndexMap<String, PointOfInterest>,
}

impl PoiStore {
    /// Baut den Store aus einer Liste. Bei doppelter ID gewinnt der erste Eintrag.
    pub fn new(pois: impl IntoIterator<Item = PointOfInterest>) -> Self {
        let mut map = IndexMap::new();
        for poi in pois {
            if map.contains_key(&poi.id) {
                log::warn!("Doppelte POI-ID '{}' ignoriert", poi.id);
                continue;
            }
            map.insert(poi.id.clone(), poi);
        }
        Self { pois: map }
    }

    /// Die feste Demo-Liste rund um den Hafen von Sydney.
    pub fn sydney_demo() -> Self {
        Self::new(
            [
                ("operaHouse", -33.8567844, 151.213108),
                ("tarongaZoo", -33.8472767, 151.2188164),
                ("manlyBeach", -33.8209738, 151.2563253),
                ("hyderPark", -33.8690081, 151.2052393),
                ("theRocks", -33.8587568, 151.2058246),
                ("circularQuay", -33.858761, 151.2055688),
                ("harbourBridge", -33.852228, 151.2038374),
                ("kingsCross", -33.8737375, 151.222569),
                ("botanicGardens", -33.864167, 151.216387),
                ("museumOfSydney", -33.8636005, 151.2092542),
                ("maritimeMuseum", -33.869395, 151.198648),
                ("kingStreetWharf", -33.8665445, 151.1989808),
                ("aquarium", -33.869627, 151.202146),
                ("darlingHarbour", -33.87488, 151.1987113),
                ("barangaroo", -33.8605523, 151.1972205),
            ]
            .into_iter()
            .map(|(id, lat, lng)| PointOfInterest::new(id, Coordinate::new(lat, lng))),
        )
    }

    /// Sucht einen POI per ID.
    pub fn get(&self, id: &str) -> Option<&PointOfInterest> {
        self.pois.get(id)
    }

    /// Alle POIs in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.pois.values()
    }

    /// Anzahl der POIs.
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_keeps_order_and_ids() {
        let store = PoiStore::sydney_demo();
        assert_eq!(store.len(), 15);
        assert_eq!(store.iter().next().map(|p| p.id.as_str()), Some("operaHouse"));
        assert!(store.get("barangaroo").is_some());
        assert!(store.get("bondiBeach").is_none());
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let store = PoiStore::new([
            PointOfInterest::new("A", Coordinate::new(0.0, 0.0)),
            PointOfInterest::new("A", Coordinate::new(5.0, 5.0)),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("A").map(|p| p.coordinate), Some(Coordinate::new(0.0, 0.0)));
    }
}
