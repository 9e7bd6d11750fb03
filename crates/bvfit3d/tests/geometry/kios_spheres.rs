use crate::common::random_cloud;
use bvfit3d::bounding_volume::{BoundingVolume, KIos};
use bvfit3d::fitting::FitBoundingVolume;
use bvfit3d::math::{Point, Real, Vector};
use std::f64::consts::PI;

fn fibonacci_sphere(n: usize, center: Point<Real>, radius: Real) -> Vec<Point<Real>> {
    let golden_angle = PI * (3.0 - 5.0f64.sqrt());

    (0..n)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / n as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden_angle * i as f64;
            let dir = Vector::new(
                (r * theta.cos()) as Real,
                y as Real,
                (r * theta.sin()) as Real,
            );
            center + dir * radius
        })
        .collect()
}

fn disk(n: usize, radius: Real, thickness: Real) -> Vec<Point<Real>> {
    let rot = na::UnitQuaternion::from_euler_angles(0.4, 0.2, -0.3);

    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            let z = if i % 2 == 0 { thickness } else { -thickness };
            let local = Vector::new(
                radius * angle.cos() as Real,
                radius * angle.sin() as Real,
                z,
            );
            Point::from(rot * local)
        })
        .collect()
}

fn rod(n: usize, half_length: Real, radius: Real) -> Vec<Point<Real>> {
    (0..n)
        .map(|i| {
            let t = i as Real / (n - 1) as Real;
            let angle = 2.0 * PI * (i % 8) as f64 / 8.0;
            Point::new(
                -half_length + 2.0 * half_length * t,
                radius * angle.cos() as Real,
                radius * angle.sin() as Real,
            )
        })
        .collect()
}

fn assert_aux_spheres_are_on_box_axes(kios: &KIos) {
    let r0 = kios.spheres[0].radius;
    let e = kios.obb.half_extents;
    let r10 = 2.0 * (r0 * r0 - e.z * e.z).max(0.0).sqrt();

    for (i, sphere) in kios.spheres.iter().enumerate().skip(1) {
        let axis = if i < 3 { kios.obb.axis(2) } else { kios.obb.axis(1) };
        let offset = sphere.center - kios.obb.center;

        assert!(relative_eq!(sphere.radius, r10, epsilon = 1.0e-4 * r10));
        assert!(
            offset.cross(&axis).norm() <= 1.0e-3,
            "sphere {} is not on the axis line",
            i
        );
    }
}

fn assert_first_sphere_covers(kios: &KIos, pts: &[Point<Real>]) {
    let sphere0 = kios.spheres[0].loosened(1.0e-3);
    assert_eq!(sphere0.center, kios.obb.center);

    for pt in pts {
        assert!(sphere0.contains_point(pt));
        assert!(kios.loosened(1.0e-3).contains_point(pt));
    }
}

#[test]
fn ball_like_clouds_get_one_sphere() {
    let pts = fibonacci_sphere(200, Point::new(1.0, 2.0, 3.0), 3.0);
    let kios = KIos::fit(&pts);

    assert_eq!(kios.num_spheres(), 1);
    assert_first_sphere_covers(&kios, &pts);
}

#[test]
fn disks_get_three_spheres() {
    let pts = disk(64, 5.0, 0.1);
    let kios = KIos::fit(&pts);

    assert_eq!(kios.num_spheres(), 3);
    assert_first_sphere_covers(&kios, &pts);
    assert_aux_spheres_are_on_box_axes(&kios);
}

#[test]
fn rods_get_five_spheres() {
    let pts = rod(100, 5.0, 0.2);
    let kios = KIos::fit(&pts);

    assert_eq!(kios.num_spheres(), 5);
    assert_first_sphere_covers(&kios, &pts);
    assert_aux_spheres_are_on_box_axes(&kios);
}

#[test]
fn random_clouds_are_covered_by_the_first_sphere() {
    for (seed, half_extents) in [
        (20, Vector::new(1.0, 1.0, 1.0)),
        (21, Vector::new(4.0, 4.0, 0.5)),
        (22, Vector::new(6.0, 0.5, 0.3)),
        (23, Vector::new(6.0, 3.0, 1.0)),
    ] {
        let pts = random_cloud(seed, 150, half_extents);
        let kios = KIos::fit(&pts);

        assert_first_sphere_covers(&kios, &pts);
        assert_aux_spheres_are_on_box_axes(&kios);
    }
}
