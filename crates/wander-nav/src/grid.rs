//! Grid-based navigable surface and builder.
//!
//! # Data layout
//!
//! The surface is a flat grid of square cells on the XZ plane at a constant
//! `height`.  Cell `(x, z)` covers
//!
//! ```text
//! [min_x + x * cell_size, min_x + (x + 1) * cell_size) ×
//! [min_z + z * cell_size, min_z + (z + 1) * cell_size)
//! ```
//!
//! and is stored at `cells[z * width + x]`: `Some(area)` when walkable,
//! `None` when blocked.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds the centre of every walkable cell.  It
//! answers "nearest walkable point" queries for points that do not already
//! sit over a qualifying cell.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wander_core::Vec3;

use crate::{AreaId, AreaMask, NavError, NavHit, NavResult, NavSurface};

/// Raycasts sample the segment this many times per cell.
const RAY_SAMPLES_PER_CELL: f32 = 4.0;

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: the 3-D centre of a walkable cell and its area.
#[derive(Clone)]
struct CellEntry {
    point: [f32; 3],
    area:  AreaId,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── GridSurface ───────────────────────────────────────────────────────────────

/// A walkability grid implementing [`NavSurface`].
///
/// Do not construct directly; use [`GridSurfaceBuilder`].
pub struct GridSurface {
    /// Cells along X.
    pub width: u32,
    /// Cells along Z.
    pub depth: u32,
    /// World units per cell edge.
    pub cell_size: f32,
    /// World X of the grid's minimum corner.
    pub min_x: f32,
    /// World Z of the grid's minimum corner.
    pub min_z: f32,
    /// World Y of the whole surface.
    pub height: f32,
    /// Per-cell area, `None` for blocked cells.  Indexed `z * width + x`.
    pub cells: Vec<Option<AreaId>>,

    spatial_idx: RTree<CellEntry>,
}

impl GridSurface {
    /// Grid cell containing the planar position of `pos`, if inside the grid.
    pub fn world_to_cell(&self, pos: Vec3) -> Option<(u32, u32)> {
        let fx = (pos.x - self.min_x) / self.cell_size;
        let fz = (pos.z - self.min_z) / self.cell_size;
        if !(fx >= 0.0 && fz >= 0.0) {
            return None;
        }
        let (x, z) = (fx as u32, fz as u32);
        if x >= self.width || z >= self.depth {
            return None;
        }
        Some((x, z))
    }

    /// World-space centre of cell `(x, z)`, on the surface.
    pub fn cell_center(&self, x: u32, z: u32) -> Vec3 {
        Vec3::new(
            self.min_x + (x as f32 + 0.5) * self.cell_size,
            self.height,
            self.min_z + (z as f32 + 0.5) * self.cell_size,
        )
    }

    /// Area of the cell under `pos`; `None` if blocked or off-grid.
    pub fn area_at(&self, pos: Vec3) -> Option<AreaId> {
        let (x, z) = self.world_to_cell(pos)?;
        self.cells[(z * self.width + x) as usize]
    }

    /// `true` if `pos` lies over a walkable cell whose area is in `areas`.
    #[inline]
    pub fn is_navigable(&self, pos: Vec3, areas: AreaMask) -> bool {
        self.area_at(pos).is_some_and(|a| areas.contains(a))
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.spatial_idx.size()
    }

    /// Project `pos` onto the surface plane.
    #[inline]
    fn on_surface(&self, pos: Vec3) -> Vec3 {
        Vec3::new(pos.x, self.height, pos.z)
    }
}

impl NavSurface for GridSurface {
    /// Points over a qualifying cell drop straight onto the surface; anything
    /// else snaps to the centre of the nearest qualifying cell.
    fn sample_nearest(&self, point: Vec3, max_distance: f32, areas: AreaMask) -> Option<NavHit> {
        let max_2 = max_distance * max_distance;

        if self.is_navigable(point, areas) {
            let position = self.on_surface(point);
            let distance = point.distance(position);
            return (distance <= max_distance).then_some(NavHit { position, distance });
        }

        self.spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[point.x, point.y, point.z])
            .take_while(|(_, d2)| *d2 <= max_2)
            .find(|(entry, _)| areas.contains(entry.area))
            .map(|(entry, d2)| NavHit {
                position: Vec3::from(entry.point),
                distance: d2.sqrt(),
            })
    }

    fn raycast(&self, from: Vec3, to: Vec3, areas: AreaMask) -> Option<NavHit> {
        let start = self.on_surface(from);
        let end   = self.on_surface(to);

        if !self.is_navigable(start, areas) {
            return Some(NavHit { position: start, distance: 0.0 });
        }

        let length = start.distance(end);
        let steps  = ((length / self.cell_size) * RAY_SAMPLES_PER_CELL).ceil().max(1.0) as u32;

        let mut last_ok = start;
        for i in 1..=steps {
            let sample = start.lerp(end, i as f32 / steps as f32);
            if !self.is_navigable(sample, areas) {
                return Some(NavHit {
                    position: last_ok,
                    distance: start.distance(last_ok),
                });
            }
            last_ok = sample;
        }
        None
    }
}

// ── GridSurfaceBuilder ────────────────────────────────────────────────────────

/// Incremental builder for [`GridSurface`].
///
/// Every cell starts walkable with [`AreaId::WALKABLE`].
pub struct GridSurfaceBuilder {
    width:     u32,
    depth:     u32,
    cell_size: f32,
    min_x:     f32,
    min_z:     f32,
    height:    f32,
    cells:     Vec<Option<AreaId>>,
}

impl GridSurfaceBuilder {
    pub fn new(width: u32, depth: u32, cell_size: f32) -> Self {
        Self {
            width,
            depth,
            cell_size,
            min_x:  0.0,
            min_z:  0.0,
            height: 0.0,
            cells:  vec![Some(AreaId::WALKABLE); width as usize * depth as usize],
        }
    }

    /// Place the grid's minimum corner at world `(min_x, min_z)`.
    pub fn origin(mut self, min_x: f32, min_z: f32) -> Self {
        self.min_x = min_x;
        self.min_z = min_z;
        self
    }

    /// Centre the grid on the world origin.
    pub fn centered(self) -> Self {
        let half_x = self.width as f32 * self.cell_size * 0.5;
        let half_z = self.depth as f32 * self.cell_size * 0.5;
        self.origin(-half_x, -half_z)
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Mark cells `[x0, x1) × [z0, z1)` as blocked.  Clamped to the grid.
    pub fn block_rect(&mut self, x0: u32, z0: u32, x1: u32, z1: u32) -> &mut Self {
        for z in z0..z1.min(self.depth) {
            for x in x0..x1.min(self.width) {
                self.cells[(z * self.width + x) as usize] = None;
            }
        }
        self
    }

    /// Set the area of one cell (`None` blocks it).
    pub fn set_cell(&mut self, x: u32, z: u32, area: Option<AreaId>) -> NavResult<&mut Self> {
        if x >= self.width || z >= self.depth {
            return Err(NavError::CellOutOfRange { x, z, width: self.width, depth: self.depth });
        }
        self.cells[(z * self.width + x) as usize] = area;
        Ok(self)
    }

    /// Validate dimensions, build the spatial index, and return the surface.
    pub fn build(self) -> NavResult<GridSurface> {
        if self.width == 0 || self.depth == 0 {
            return Err(NavError::EmptyGrid { width: self.width, depth: self.depth });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(NavError::BadCellSize(self.cell_size));
        }

        let mut surface = GridSurface {
            width:       self.width,
            depth:       self.depth,
            cell_size:   self.cell_size,
            min_x:       self.min_x,
            min_z:       self.min_z,
            height:      self.height,
            cells:       self.cells,
            spatial_idx: RTree::new(),
        };

        let entries: Vec<CellEntry> = (0..surface.depth)
            .flat_map(|z| (0..surface.width).map(move |x| (x, z)))
            .filter_map(|(x, z)| {
                let area = surface.cells[(z * surface.width + x) as usize]?;
                Some(CellEntry { point: surface.cell_center(x, z).to_array(), area })
            })
            .collect();
        surface.spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "built {}x{} nav grid, {} walkable cells",
            surface.width,
            surface.depth,
            surface.walkable_count()
        );
        Ok(surface)
    }
}
