//! Axial hex geometry
//!
//! Coordinates are `hexx::Hex` values read as axial `(q, r)` = `(x, y)`.
//! Addition and equality come from hexx's `Add`/`PartialEq` impls; this module
//! adds the fixed neighbour order and the pointy-top pixel layout used by the
//! map renderer.

use bevy::math::Vec2;
use hexx::Hex;

/// The six axial offsets, in the order neighbours are reported.
pub const AXIAL_DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

/// All six neighbours of `hex`, in `AXIAL_DIRECTIONS` order.
///
/// `hex` must sit at least one step inside the `i32` range on both axes;
/// use [`bounded_neighbors`] for arbitrary coordinates.
pub fn neighbors(hex: Hex) -> [Hex; 6] {
    AXIAL_DIRECTIONS.map(|offset| hex + offset)
}

/// `hex + offset`, or `None` when a component leaves the `i32` range.
pub fn checked_offset(hex: Hex, offset: Hex) -> Option<Hex> {
    Some(Hex::new(hex.x.checked_add(offset.x)?, hex.y.checked_add(offset.y)?))
}

/// The neighbours of `hex` that are representable, in `AXIAL_DIRECTIONS` order.
pub fn bounded_neighbors(hex: Hex) -> impl Iterator<Item = Hex> {
    AXIAL_DIRECTIONS
        .into_iter()
        .filter_map(move |offset| checked_offset(hex, offset))
}

/// True when `b` is one of the six neighbours of `a`.
///
/// Works on widened deltas, so coordinates at the edge of the `i32` range
/// compare without overflow.
pub fn is_adjacent(a: Hex, b: Hex) -> bool {
    let dq = i64::from(b.x) - i64::from(a.x);
    let dr = i64::from(b.y) - i64::from(a.y);
    AXIAL_DIRECTIONS
        .iter()
        .any(|offset| i64::from(offset.x) == dq && i64::from(offset.y) == dr)
}

/// Pointy-top projection of an axial coordinate onto the plane.
pub fn axial_to_pixel(hex: Hex, size: f32) -> Vec2 {
    let q = hex.x as f32;
    let r = hex.y as f32;
    Vec2::new(size * 3f32.sqrt() * (q + r / 2.0), size * 1.5 * r)
}

/// Corners of a pointy-top hexagon, starting at -30° and turning by 60°.
pub fn hex_corners(center: Vec2, size: f32) -> [Vec2; 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f32 - 30.0).to_radians();
        center + Vec2::new(size * angle.cos(), size * angle.sin())
    })
}

/// Convenience accessors so call sites can speak in axial terms.
pub trait AxialExt {
    fn q(&self) -> i32;
    fn r(&self) -> i32;
}

impl AxialExt for Hex {
    fn q(&self) -> i32 {
        self.x
    }

    fn r(&self) -> i32 {
        self.y
    }
}
