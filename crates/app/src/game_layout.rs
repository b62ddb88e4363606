//! Screen layout: the map panel on top, a fixed-height status panel below.

use crawl_core::Pos;
use taffy::prelude::*;
use taffy::{Layout, TaffyError, TaffyTree};

use crate::window_config::UI_PANEL_HEIGHT;

pub struct LayoutNodes {
    root: NodeId,
    map: NodeId,
    ui: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub map: PanelRect,
    pub ui: PanelRect,
}

impl FrameLayout {
    /// Same split without the layout engine.
    pub fn fallback(viewport_width: f32, viewport_height: f32) -> Self {
        let map_height = (viewport_height - UI_PANEL_HEIGHT).max(0.0);
        Self {
            map: PanelRect { x: 0.0, y: 0.0, width: viewport_width, height: map_height },
            ui: PanelRect { x: 0.0, y: map_height, width: viewport_width, height: UI_PANEL_HEIGHT },
        }
    }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> Result<LayoutNodes, TaffyError> {
    let map = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() })?;
    let ui = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(UI_PANEL_HEIGHT) },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            ..Default::default()
        },
        &[map, ui],
    )?;
    Ok(LayoutNodes { root, map, ui })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<FrameLayout, TaffyError> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let root = *taffy.layout(nodes.root)?;
    Ok(FrameLayout {
        map: panel_rect(taffy.layout(nodes.map)?, &root),
        ui: panel_rect(taffy.layout(nodes.ui)?, &root),
    })
}

fn panel_rect(layout: &Layout, parent: &Layout) -> PanelRect {
    PanelRect {
        x: parent.location.x + layout.location.x,
        y: parent.location.y + layout.location.y,
        width: layout.size.width,
        height: layout.size.height,
    }
}

/// Square tiles of `cell` pixels, centred in the map panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell: f32,
    pub columns: usize,
    pub rows: usize,
}

impl MapGeometry {
    pub fn fit(panel: PanelRect, columns: usize, rows: usize) -> Self {
        let cell = (panel.width / columns.max(1) as f32)
            .min(panel.height / rows.max(1) as f32)
            .floor()
            .max(1.0);
        Self {
            origin_x: panel.x + (panel.width - cell * columns as f32) / 2.0,
            origin_y: panel.y + (panel.height - cell * rows as f32) / 2.0,
            cell,
            columns,
            rows,
        }
    }

    /// Tile under a screen point, `None` outside the grid.
    pub fn tile_at(&self, screen_x: f32, screen_y: f32) -> Option<Pos> {
        let col = ((screen_x - self.origin_x) / self.cell).floor();
        let row = ((screen_y - self.origin_y) / self.cell).floor();
        if col < 0.0 || row < 0.0 || col >= self.columns as f32 || row >= self.rows as f32 {
            return None;
        }
        Some(Pos { y: row as i32, x: col as i32 })
    }

    pub fn tile_origin(&self, pos: Pos) -> (f32, f32) {
        (self.origin_x + pos.x as f32 * self.cell, self.origin_y + pos.y as f32 * self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(width: f32, height: f32) -> PanelRect {
        PanelRect { x: 0.0, y: 0.0, width, height }
    }

    #[test]
    fn layout_splits_off_the_status_panel() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy).expect("nodes");
        let layout = compute_frame_layout(&mut taffy, &nodes, 1200.0, 780.0).expect("layout");

        assert_eq!(layout, FrameLayout::fallback(1200.0, 780.0));
    }

    #[test]
    fn geometry_centres_the_grid() {
        let geometry = MapGeometry::fit(panel(1300.0, 720.0), 25, 15);
        assert_eq!(geometry.cell, 48.0);
        assert_eq!(geometry.origin_x, 50.0);
        assert_eq!(geometry.origin_y, 0.0);
    }

    #[test]
    fn clicks_resolve_to_tiles() {
        let geometry = MapGeometry::fit(panel(1200.0, 720.0), 25, 15);
        assert_eq!(geometry.tile_at(0.0, 0.0), Some(Pos { y: 0, x: 0 }));
        assert_eq!(geometry.tile_at(100.0, 50.0), Some(Pos { y: 1, x: 2 }));
        assert_eq!(geometry.tile_at(1199.0, 719.0), Some(Pos { y: 14, x: 24 }));
        assert_eq!(geometry.tile_at(1200.0, 10.0), None);
        assert_eq!(geometry.tile_at(-1.0, 10.0), None);
        assert_eq!(geometry.tile_at(10.0, 730.0), None);
    }
}
