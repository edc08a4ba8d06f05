//! The meadow the demo agents wander in.

use wander_nav::{AreaId, GridSurface, GridSurfaceBuilder, NavResult};

pub const WIDTH:     u32 = 48;
pub const DEPTH:     u32 = 48;
pub const CELL_SIZE: f32 = 1.0;

/// Walkable, but outside the default agent template's area mask.
pub const FLOWERBED: AreaId = AreaId(1);

/// 48 × 48 m meadow centred on the origin: a pond in the north-east, a
/// fence with a gate on the west side, and a flowerbed in the south-east.
pub fn build_meadow() -> NavResult<GridSurface> {
    let mut b = GridSurfaceBuilder::new(WIDTH, DEPTH, CELL_SIZE).centered();

    // Pond.
    b.block_rect(28, 28, 36, 35);

    // Fence, gate at z ∈ [20, 24).
    b.block_rect(12, 4, 13, 20);
    b.block_rect(12, 24, 13, 44);

    for z in 8..14 {
        for x in 30..38 {
            b.set_cell(x, z, Some(FLOWERBED))?;
        }
    }

    b.build()
}
