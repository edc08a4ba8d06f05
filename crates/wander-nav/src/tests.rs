//! Unit tests for wander-nav.
//!
//! All tests use small hand-built grids.

#[cfg(test)]
mod helpers {
    use crate::{GridSurface, GridSurfaceBuilder};

    /// 10×10 open grid of 1 m cells with its minimum corner at the origin.
    pub fn open_grid() -> GridSurface {
        GridSurfaceBuilder::new(10, 10, 1.0).build().unwrap()
    }

    /// 10×10 grid with a full-depth wall occupying column x = 5.
    ///
    /// ```text
    /// z
    /// 9 . . . . . # . . . .
    /// …
    /// 0 . . . . . # . . . .
    ///   0 1 2 3 4 5 6 7 8 9  x
    /// ```
    pub fn walled_grid() -> GridSurface {
        let mut b = GridSurfaceBuilder::new(10, 10, 1.0);
        b.block_rect(5, 0, 6, 10);
        b.build().unwrap()
    }
}

// ── Areas ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod areas {
    use crate::{AreaId, AreaMask, PathStatus};

    #[test]
    fn mask_contains() {
        let mask = AreaMask::only(AreaId(3)).with(AreaId(0));
        assert!(mask.contains(AreaId(0)));
        assert!(mask.contains(AreaId(3)));
        assert!(!mask.contains(AreaId(1)));
        assert!(AreaMask::ALL.contains(AreaId(31)));
        assert!(!AreaMask::NONE.contains(AreaId(0)));
    }

    #[test]
    fn out_of_range_area_is_never_contained() {
        assert_eq!(AreaMask::only(AreaId(40)), AreaMask::NONE);
        assert!(!AreaMask::ALL.contains(AreaId(40)));
    }

    #[test]
    fn broken_statuses() {
        assert!(!PathStatus::Complete.is_broken());
        assert!(PathStatus::Partial.is_broken());
        assert!(PathStatus::Invalid.is_broken());
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{AreaId, GridSurfaceBuilder, NavError};

    #[test]
    fn empty_grid_rejected() {
        let err = GridSurfaceBuilder::new(0, 4, 1.0).build().err().unwrap();
        assert!(matches!(err, NavError::EmptyGrid { width: 0, depth: 4 }));
    }

    #[test]
    fn bad_cell_size_rejected() {
        assert!(matches!(
            GridSurfaceBuilder::new(4, 4, 0.0).build(),
            Err(NavError::BadCellSize(_))
        ));
        assert!(matches!(
            GridSurfaceBuilder::new(4, 4, f32::NAN).build(),
            Err(NavError::BadCellSize(_))
        ));
    }

    #[test]
    fn set_cell_out_of_range() {
        let mut b = GridSurfaceBuilder::new(4, 4, 1.0);
        assert!(b.set_cell(3, 3, None).is_ok());
        assert!(matches!(
            b.set_cell(4, 0, Some(AreaId(1))),
            Err(NavError::CellOutOfRange { x: 4, z: 0, .. })
        ));
    }

    #[test]
    fn block_rect_is_clamped() {
        let mut b = GridSurfaceBuilder::new(4, 4, 1.0);
        b.block_rect(2, 2, 99, 99);
        let grid = b.build().unwrap();
        assert_eq!(grid.walkable_count(), 12);
    }

    #[test]
    fn centered_grid_spans_origin() {
        let grid = GridSurfaceBuilder::new(10, 10, 2.0).centered().build().unwrap();
        assert_eq!(grid.min_x, -10.0);
        assert_eq!(grid.min_z, -10.0);
        assert_eq!(grid.world_to_cell(wander_core::Vec3::ZERO), Some((5, 5)));
    }
}

// ── Grid geometry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use wander_core::Vec3;

    use super::helpers::open_grid;

    #[test]
    fn world_to_cell_bounds() {
        let grid = open_grid();
        assert_eq!(grid.world_to_cell(Vec3::new(0.2, 0.0, 0.2)), Some((0, 0)));
        assert_eq!(grid.world_to_cell(Vec3::new(9.9, 7.0, 3.1)), Some((9, 3)));
        assert_eq!(grid.world_to_cell(Vec3::new(-0.1, 0.0, 1.0)), None);
        assert_eq!(grid.world_to_cell(Vec3::new(10.0, 0.0, 1.0)), None);
        assert_eq!(grid.world_to_cell(Vec3::new(f32::NAN, 0.0, 1.0)), None);
    }

    #[test]
    fn cell_center() {
        let grid = open_grid();
        assert_eq!(grid.cell_center(2, 7), Vec3::new(2.5, 0.0, 7.5));
    }
}

// ── sample_nearest ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sample_nearest {
    use wander_core::Vec3;

    use super::helpers::open_grid;
    use crate::{AreaId, AreaMask, GridSurfaceBuilder, NavSurface};

    #[test]
    fn point_over_walkable_cell_drops_onto_surface() {
        let grid = open_grid();
        let hit = grid.sample_nearest(Vec3::new(3.3, 0.4, 6.1), 1.0, AreaMask::ALL).unwrap();
        assert_eq!(hit.position, Vec3::new(3.3, 0.0, 6.1));
        assert!((hit.distance - 0.4).abs() < 1e-6);
    }

    #[test]
    fn point_too_high_above_surface_misses() {
        let grid = open_grid();
        assert!(grid.sample_nearest(Vec3::new(2.5, 3.0, 2.5), 2.0, AreaMask::ALL).is_none());
    }

    #[test]
    fn blocked_cell_snaps_to_neighbor_centre() {
        let mut b = GridSurfaceBuilder::new(10, 10, 1.0);
        b.block_rect(5, 5, 6, 6);
        let grid = b.build().unwrap();

        let hit = grid.sample_nearest(Vec3::new(5.5, 0.0, 5.5), 2.0, AreaMask::ALL).unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-5, "distance {}", hit.distance);
        assert_ne!(grid.world_to_cell(hit.position), Some((5, 5)));
    }

    #[test]
    fn blocked_cell_with_small_radius_misses() {
        let mut b = GridSurfaceBuilder::new(10, 10, 1.0);
        b.block_rect(5, 5, 6, 6);
        let grid = b.build().unwrap();
        assert!(grid.sample_nearest(Vec3::new(5.5, 0.0, 5.5), 0.5, AreaMask::ALL).is_none());
    }

    #[test]
    fn off_grid_point_snaps_inside() {
        let grid = open_grid();
        let hit = grid.sample_nearest(Vec3::new(-0.5, 0.0, 0.5), 2.0, AreaMask::ALL).unwrap();
        assert_eq!(hit.position, Vec3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn area_mask_filters_cells() {
        let mut b = GridSurfaceBuilder::new(10, 10, 1.0);
        b.set_cell(3, 3, Some(AreaId(2))).unwrap();
        let grid = b.build().unwrap();
        let over = Vec3::new(3.5, 0.0, 3.5);

        let exact = grid.sample_nearest(over, 2.0, AreaMask::only(AreaId(2))).unwrap();
        assert_eq!(exact.position, over);

        let ground = grid.sample_nearest(over, 2.0, AreaMask::only(AreaId(0))).unwrap();
        assert_ne!(grid.world_to_cell(ground.position), Some((3, 3)));
        assert!((ground.distance - 1.0).abs() < 1e-5);

        assert!(grid.sample_nearest(over, 2.0, AreaMask::NONE).is_none());
    }
}

// ── raycast ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod raycast {
    use wander_core::Vec3;

    use super::helpers::{open_grid, walled_grid};
    use crate::{AreaMask, NavSurface};

    #[test]
    fn clear_line_reports_nothing() {
        let grid = open_grid();
        let hit = grid.raycast(Vec3::new(0.5, 0.0, 0.5), Vec3::new(9.5, 0.0, 9.5), AreaMask::ALL);
        assert!(hit.is_none());
    }

    #[test]
    fn wall_stops_the_ray() {
        let grid = walled_grid();
        let hit = grid
            .raycast(Vec3::new(2.5, 0.0, 2.5), Vec3::new(8.5, 0.0, 2.5), AreaMask::ALL)
            .unwrap();
        assert!(hit.position.x < 5.0 && hit.position.x > 4.0, "hit at {}", hit.position);
        assert!((hit.distance - (hit.position.x - 2.5)).abs() < 1e-5);
    }

    #[test]
    fn same_side_of_wall_is_clear() {
        let grid = walled_grid();
        let hit = grid.raycast(Vec3::new(0.5, 0.0, 0.5), Vec3::new(4.5, 0.0, 9.5), AreaMask::ALL);
        assert!(hit.is_none());
    }

    #[test]
    fn blocked_start_hits_immediately() {
        let grid = walled_grid();
        let hit = grid
            .raycast(Vec3::new(5.5, 0.0, 5.5), Vec3::new(8.5, 0.0, 5.5), AreaMask::ALL)
            .unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn leaving_the_grid_is_an_obstruction() {
        let grid = open_grid();
        let hit = grid.raycast(Vec3::new(8.5, 0.0, 0.5), Vec3::new(12.0, 0.0, 0.5), AreaMask::ALL);
        assert!(hit.is_some());
    }

    #[test]
    fn height_is_ignored() {
        let grid = open_grid();
        let hit = grid.raycast(Vec3::new(0.5, 4.0, 0.5), Vec3::new(3.5, -2.0, 0.5), AreaMask::ALL);
        assert!(hit.is_none());
    }
}

// ── GridAgent ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_agent {
    use wander_core::Vec3;

    use super::helpers::{open_grid, walled_grid};
    use crate::{GridAgent, GridAgentConfig, ObstacleAvoidance, PathAgent, PathStatus};

    fn agent_at(x: f32, z: f32, speed: f32) -> GridAgent {
        let config = GridAgentConfig { speed, ..GridAgentConfig::default() };
        GridAgent::new(config, Vec3::new(x, 0.0, z))
    }

    #[test]
    fn fresh_agent_is_idle_and_complete() {
        let agent = agent_at(1.5, 1.5, 2.0);
        assert!(!agent.path_pending());
        assert_eq!(agent.path_status(), PathStatus::Complete);
        assert_eq!(agent.remaining_distance(), 0.0);
        assert_eq!(agent.velocity(), Vec3::ZERO);
    }

    #[test]
    fn destination_resolves_on_next_advance_without_moving() {
        let grid = open_grid();
        let mut agent = agent_at(1.5, 1.5, 2.0);
        assert!(agent.set_destination(Vec3::new(5.5, 0.0, 1.5)));
        assert!(agent.path_pending());

        agent.advance(&grid, 0.5);
        assert!(!agent.path_pending());
        assert_eq!(agent.path_status(), PathStatus::Complete);
        assert_eq!(agent.position(), Vec3::new(1.5, 0.0, 1.5));
        assert!((agent.remaining_distance() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn walks_at_speed_and_stops_on_goal() {
        let grid = open_grid();
        let mut agent = agent_at(1.5, 1.5, 2.0);
        agent.set_destination(Vec3::new(5.5, 0.0, 1.5));
        agent.advance(&grid, 0.5); // resolve

        agent.advance(&grid, 0.5);
        assert!((agent.velocity().length() - 2.0).abs() < 1e-5);
        assert!((agent.remaining_distance() - 3.0).abs() < 1e-5);

        for _ in 0..10 {
            agent.advance(&grid, 0.5);
        }
        assert!(agent.remaining_distance() < 1e-5);
        assert_eq!(agent.velocity(), Vec3::ZERO);
    }

    #[test]
    fn stops_short_by_stopping_distance() {
        let grid = open_grid();
        let config = GridAgentConfig { speed: 10.0, stopping_distance: 1.0, ..GridAgentConfig::default() };
        let mut agent = GridAgent::new(config, Vec3::new(1.5, 0.0, 1.5));
        agent.set_destination(Vec3::new(5.5, 0.0, 1.5));
        for _ in 0..5 {
            agent.advance(&grid, 0.5);
        }
        assert!((agent.remaining_distance() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn obstructed_line_is_partial() {
        let grid = walled_grid();
        let mut agent = agent_at(2.5, 2.5, 2.0);
        agent.set_destination(Vec3::new(8.5, 0.0, 2.5));
        agent.advance(&grid, 0.1);
        assert_eq!(agent.path_status(), PathStatus::Partial);
        assert!(agent.goal().unwrap().x < 5.0);
    }

    #[test]
    fn unreachable_target_is_invalid() {
        let grid = open_grid();
        let mut agent = agent_at(2.5, 2.5, 2.0);
        agent.set_destination(Vec3::new(50.0, 0.0, 50.0));
        agent.advance(&grid, 0.1);
        assert_eq!(agent.path_status(), PathStatus::Invalid);
        assert_eq!(agent.goal(), None);
        assert_eq!(agent.remaining_distance(), 0.0);
    }

    #[test]
    fn non_finite_target_refused() {
        let mut agent = agent_at(2.5, 2.5, 2.0);
        assert!(!agent.set_destination(Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!agent.path_pending());
    }

    #[test]
    fn settings_are_recorded() {
        let mut agent = agent_at(2.5, 2.5, 2.0);
        agent.set_radius(0.25);
        agent.set_obstacle_avoidance(ObstacleAvoidance::High);
        assert_eq!(agent.radius(), 0.25);
        assert_eq!(agent.obstacle_avoidance(), ObstacleAvoidance::High);
        assert_eq!(agent.config().radius, 0.25);
    }
}

// ── ParamBlock ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod param_block {
    use crate::{AnimationSink, ParamBlock};

    #[test]
    fn stores_last_value() {
        let mut params = ParamBlock::new();
        assert_eq!(params.get("Speed"), None);
        params.set_float("Speed", 1.5);
        params.set_float("Speed", 2.5);
        assert_eq!(params.get("Speed"), Some(2.5));
        assert_eq!(params.writes(), 2);
    }
}
