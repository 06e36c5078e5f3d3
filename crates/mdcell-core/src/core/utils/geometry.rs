use nalgebra::SVector;

/// A stack-allocated `D`-dimensional coordinate or displacement vector.
pub type Vector<const D: usize> = SVector<f64, D>;

/// Applies the minimum-image convention to a separation vector.
///
/// Each component is shifted by whole multiples of the corresponding box edge
/// so that the returned displacement points to the nearest periodic image.
pub fn minimum_image<const D: usize>(mut dr: Vector<D>, box_lengths: &Vector<D>) -> Vector<D> {
    for axis in 0..D {
        let length = box_lengths[axis];
        dr[axis] -= length * (dr[axis] / length).round();
    }
    dr
}

/// Decomposes a separation vector into a unit direction and a floored norm.
///
/// The norm is floored at `min_distance` so that callers dividing by the
/// distance never hit a floating-point fault for coincident particles. A
/// zero-length separation yields a zero direction vector, which downstream
/// force accumulation treats as "no preferred direction".
pub fn unit_and_distance<const D: usize>(
    dr: &Vector<D>,
    min_distance: f64,
) -> (Vector<D>, f64) {
    let dist = dr.norm().max(min_distance);
    (dr / dist, dist)
}

/// Returns `true` if every component of the vector is finite.
#[inline]
pub fn is_finite<const D: usize>(v: &Vector<D>) -> bool {
    v.iter().all(|c| c.is_finite())
}
