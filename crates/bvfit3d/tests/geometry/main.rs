#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod axis_ordering;
mod indexed_fit;
mod kios_spheres;
mod merge;

mod common {
    use bvfit3d::math::{Point, Real, Vector};
    use oorandom::Rand32;

    /// Points uniformly sampled in the box `[-half_extents, half_extents]`,
    /// rotated then translated.
    pub fn random_cloud(seed: u64, n: usize, half_extents: Vector<Real>) -> Vec<Point<Real>> {
        let mut rng = Rand32::new(seed);
        let rot = na::UnitQuaternion::from_euler_angles(0.3, -1.1, 0.7);
        let shift = Vector::new(3.0, -2.0, 1.0);

        (0..n)
            .map(|_| {
                let local = Vector::new(
                    (rng.rand_float() as Real * 2.0 - 1.0) * half_extents.x,
                    (rng.rand_float() as Real * 2.0 - 1.0) * half_extents.y,
                    (rng.rand_float() as Real * 2.0 - 1.0) * half_extents.z,
                );
                Point::from(rot * local + shift)
            })
            .collect()
    }

    /// Deterministically shuffles a slice.
    pub fn shuffled<T: Clone>(seed: u64, items: &[T]) -> Vec<T> {
        let mut rng = Rand32::new(seed);
        let mut res = items.to_vec();

        for i in (1..res.len()).rev() {
            let j = rng.rand_range(0..(i as u32 + 1)) as usize;
            res.swap(i, j);
        }

        res
    }
}
