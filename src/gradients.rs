//! Constant gradient sets, one per dimension.
//! 1D noise reuses [`GRAD2`], reading only the x component.

use bevy_math::{DVec2, DVec3, DVec4};

/// The 2D gradients: the four diagonals followed by the four axes.
pub const GRAD2: [DVec2; 8] = [
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, -1.0),
];

/// The 3D gradients: the midpoints of the edges of a cube.
pub const GRAD3: [DVec3; 12] = [
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
];

/// The 4D gradients: every vector with one zero component and the rest `±1`.
pub const GRAD4: [DVec4; 32] = [
    DVec4::new(0.0, 1.0, 1.0, 1.0),
    DVec4::new(0.0, 1.0, 1.0, -1.0),
    DVec4::new(0.0, 1.0, -1.0, 1.0),
    DVec4::new(0.0, 1.0, -1.0, -1.0),
    DVec4::new(0.0, -1.0, 1.0, 1.0),
    DVec4::new(0.0, -1.0, 1.0, -1.0),
    DVec4::new(0.0, -1.0, -1.0, 1.0),
    DVec4::new(0.0, -1.0, -1.0, -1.0),
    DVec4::new(1.0, 0.0, 1.0, 1.0),
    DVec4::new(1.0, 0.0, 1.0, -1.0),
    DVec4::new(1.0, 0.0, -1.0, 1.0),
    DVec4::new(1.0, 0.0, -1.0, -1.0),
    DVec4::new(-1.0, 0.0, 1.0, 1.0),
    DVec4::new(-1.0, 0.0, 1.0, -1.0),
    DVec4::new(-1.0, 0.0, -1.0, 1.0),
    DVec4::new(-1.0, 0.0, -1.0, -1.0),
    DVec4::new(1.0, 1.0, 0.0, 1.0),
    DVec4::new(1.0, 1.0, 0.0, -1.0),
    DVec4::new(1.0, -1.0, 0.0, 1.0),
    DVec4::new(1.0, -1.0, 0.0, -1.0),
    DVec4::new(-1.0, 1.0, 0.0, 1.0),
    DVec4::new(-1.0, 1.0, 0.0, -1.0),
    DVec4::new(-1.0, -1.0, 0.0, 1.0),
    DVec4::new(-1.0, -1.0, 0.0, -1.0),
    DVec4::new(1.0, 1.0, 1.0, 0.0),
    DVec4::new(1.0, 1.0, -1.0, 0.0),
    DVec4::new(1.0, -1.0, 1.0, 0.0),
    DVec4::new(1.0, -1.0, -1.0, 0.0),
    DVec4::new(-1.0, 1.0, 1.0, 0.0),
    DVec4::new(-1.0, 1.0, -1.0, 0.0),
    DVec4::new(-1.0, -1.0, 1.0, 0.0),
    DVec4::new(-1.0, -1.0, -1.0, 0.0),
];
