//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{ClusterGroup, MarkerPoint};
use crate::shared::{
    ClusterVisual, HighlightCircle, MarkerVisual, PopupContent, RenderScene, SceneItem,
};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let items = match state.clusterer.as_ref() {
        Some(clusterer) => clusterer
            .groups()
            .iter()
            .filter_map(|group| scene_item(state, group))
            .collect(),
        // Ohne Clusterer (noch kein Host) alle Marker einzeln
        None => state
            .marker_points()
            .iter()
            .map(|point| SceneItem::Marker(marker_visual(state, point)))
            .collect(),
    };

    let highlight = state
        .selection
        .highlight_center()
        .map(|center| HighlightCircle {
            center,
            radius_m: state.options.highlight_radius_m,
            stroke_color: state.options.highlight_stroke_color,
            stroke_width: state.options.highlight_stroke_width,
            fill_color: state.options.highlight_fill_color,
        });

    let popup = state.selection.selected().map(|poi| PopupContent {
        anchor: poi.coordinate,
        title: poi.id.clone(),
        body: format!("{}", poi.coordinate),
    });

    RenderScene {
        items,
        highlight,
        popup,
        options: state.options.clone(),
    }
}

fn scene_item(state: &AppState, group: &ClusterGroup) -> Option<SceneItem> {
    if group.is_cluster() {
        let bounds = group.bounds()?;
        Some(SceneItem::Cluster(ClusterVisual {
            count: group.len(),
            position: group.position,
            bounds,
        }))
    } else {
        group
            .members
            .first()
            .map(|point| SceneItem::Marker(marker_visual(state, point)))
    }
}

fn marker_visual(state: &AppState, point: &MarkerPoint) -> MarkerVisual {
    MarkerVisual {
        id: point.id.clone(),
        handle: point.handle,
        position: point.position,
        selected: state.selection.is_selected(&point.id),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases::clusters::attach_host;
    use crate::app::AppState;
    use crate::core::{Coordinate, HostId, MarkerHandle, Viewport};
    use crate::shared::SceneItem;

    fn mount_all(state: &mut AppState) {
        let ids: Vec<String> = state.pois.iter().map(|p| p.id.clone()).collect();
        for (i, id) in ids.iter().enumerate() {
            state.markers.register(id, MarkerHandle::from_raw(i as u64 + 1));
        }
    }

    #[test]
    fn idle_scene_has_no_highlight_or_popup() {
        let mut state = AppState::default();
        mount_all(&mut state);

        let scene = build(&state);

        assert_eq!(scene.items.len(), state.pois.len());
        assert!(scene.highlight.is_none());
        assert!(scene.popup.is_none());
    }

    #[test]
    fn selection_adds_highlight_and_popup() {
        let mut state = AppState::default();
        let poi = state.pois.get("aquarium").cloned().expect("POI erwartet");
        state.selection.select(poi.clone());

        let scene = build(&state);

        let highlight = scene.highlight.expect("Highlight erwartet");
        assert_eq!(highlight.center, poi.coordinate);
        assert_eq!(highlight.radius_m, 800.0);

        let popup = scene.popup.expect("Popup erwartet");
        assert_eq!(popup.title, "aquarium");
        assert_eq!(popup.anchor, poi.coordinate);
        assert!(popup.body.contains("-33.869627"));
    }

    #[test]
    fn clustered_scene_covers_every_marker_once() {
        let mut state = AppState::default();
        mount_all(&mut state);
        attach_host(
            &mut state,
            HostId(1),
            Viewport::new(Coordinate::new(-33.86, 151.21), 13.0, [800.0, 600.0]),
        );

        let scene = build(&state);

        let covered: usize = scene
            .items
            .iter()
            .map(|item| match item {
                SceneItem::Marker(_) => 1,
                SceneItem::Cluster(c) => c.count,
            })
            .sum();
        assert_eq!(covered, state.pois.len());
        assert!(scene.cluster_count() >= 1);
    }
}
