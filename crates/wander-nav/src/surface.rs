//! Navigable-surface query trait and the types it speaks.
//!
//! # Pluggability
//!
//! Behavior code never inspects a navmesh directly; it asks a
//! [`NavSurface`] for the nearest walkable point and for straight-line
//! visibility.  Engines plug their own mesh in behind this trait; the crate
//! ships [`GridSurface`][crate::GridSurface] as the default.

use std::fmt;

use wander_core::Vec3;

// ── Areas ─────────────────────────────────────────────────────────────────────

/// Traversal area type of a piece of surface (walkable ground, road, grass…).
///
/// Only the low 32 ids can be addressed by an [`AreaMask`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaId(pub u8);

impl AreaId {
    /// The area every cell gets unless told otherwise.
    pub const WALKABLE: AreaId = AreaId(0);
}

/// Bit set of the area types an agent is allowed to traverse.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaMask(pub u32);

impl AreaMask {
    pub const ALL: AreaMask = AreaMask(u32::MAX);
    pub const NONE: AreaMask = AreaMask(0);

    /// A mask allowing exactly `area`.
    #[inline]
    pub fn only(area: AreaId) -> AreaMask {
        AreaMask(1u32.checked_shl(area.0 as u32).unwrap_or(0))
    }

    #[inline]
    pub fn contains(self, area: AreaId) -> bool {
        self.0 & AreaMask::only(area).0 != 0
    }

    #[inline]
    pub fn with(self, area: AreaId) -> AreaMask {
        AreaMask(self.0 | AreaMask::only(area).0)
    }
}

impl Default for AreaMask {
    fn default() -> Self {
        AreaMask::ALL
    }
}

impl fmt::Display for AreaMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

// ── NavHit ────────────────────────────────────────────────────────────────────

/// A point on the navigable surface returned by a query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavHit {
    /// The point on the surface.
    pub position: Vec3,
    /// Distance from the query origin to `position`.
    pub distance: f32,
}

// ── NavSurface trait ──────────────────────────────────────────────────────────

/// Read-only navigable-surface queries.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one surface is shared by every
/// agent, and the `parallel` tick in `wander-sim` queries it from many
/// threads at once.
pub trait NavSurface: Send + Sync {
    /// The nearest navigable point to `point` within `max_distance`, restricted
    /// to areas in `areas`.  `None` if nothing qualifies.
    fn sample_nearest(&self, point: Vec3, max_distance: f32, areas: AreaMask) -> Option<NavHit>;

    /// Trace a straight line along the surface from `from` to `to`.
    ///
    /// Returns `None` when the line is unobstructed, or the last navigable
    /// point before the obstruction.
    fn raycast(&self, from: Vec3, to: Vec3, areas: AreaMask) -> Option<NavHit>;
}
