use crate::common::random_cloud;
use bvfit3d::bounding_volume::{BoundingVolume, KIos, Obb, ObbRss, Rss};
use bvfit3d::fitting::FitBoundingVolume;
use bvfit3d::math::{Point, Real, Vector};

fn two_triangles() -> [Point<Real>; 6] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(10.0, 2.0, 1.0),
        Point::new(11.0, 2.5, 1.0),
        Point::new(10.5, 3.0, 2.0),
    ]
}

fn triangle_fits<B: FitBoundingVolume>(pts: &[Point<Real>; 6]) -> [B; 2] {
    [
        B::fit_triangle(&pts[0], &pts[1], &pts[2]),
        B::fit_triangle(&pts[3], &pts[4], &pts[5]),
    ]
}

#[test]
fn six_point_obb_merges_both_triangles() {
    let pts = two_triangles();
    let obb = Obb::fit(&pts);
    let [a, b] = triangle_fits::<Obb>(&pts);

    assert_eq!(obb, a.merged(&b));
    assert!(obb.loosened(1.0e-4).contains(&a));
    assert!(obb.loosened(1.0e-4).contains(&b));
    assert!(obb.volume() >= a.volume());
    assert!(obb.volume() >= b.volume());
    for pt in &pts {
        assert!(obb.loosened(1.0e-4).contains_point(pt));
    }
}

#[test]
fn six_point_rss_merges_both_triangles() {
    let pts = two_triangles();
    let rss = Rss::fit(&pts);
    let [a, b] = triangle_fits::<Rss>(&pts);

    assert!(rss.loosened(1.0e-4).contains(&a));
    assert!(rss.loosened(1.0e-4).contains(&b));
    assert!(rss.radius >= a.radius.max(b.radius));
    for pt in &pts {
        assert!(rss.loosened(1.0e-4).contains_point(pt));
    }
}

#[test]
fn six_point_kios_merges_both_triangles() {
    let pts = two_triangles();
    let kios = KIos::fit(&pts);
    let [a, b] = triangle_fits::<KIos>(&pts);

    assert_eq!(kios.num_spheres(), 3);
    for i in 0..3 {
        assert!(kios.spheres[i].loosened(1.0e-4).contains(&a.spheres[i]));
        assert!(kios.spheres[i].loosened(1.0e-4).contains(&b.spheres[i]));
    }
    assert!(kios.obb.loosened(1.0e-4).contains(&a.obb));
    assert!(kios.obb.loosened(1.0e-4).contains(&b.obb));
    for pt in &pts {
        assert!(kios.loosened(1.0e-4).contains_point(pt));
    }
}

#[test]
fn six_point_obb_rss_merges_both_triangles() {
    let pts = two_triangles();
    let obb_rss = ObbRss::fit(&pts);
    let [a, b] = triangle_fits::<ObbRss>(&pts);

    assert_eq!(obb_rss.obb, a.obb.merged(&b.obb));
    assert!(obb_rss.rss.loosened(1.0e-4).contains(&a.rss));
    assert!(obb_rss.rss.loosened(1.0e-4).contains(&b.rss));
    for pt in &pts {
        assert!(obb_rss.loosened(1.0e-4).contains_point(pt));
    }
}

#[test]
fn sibling_volumes_merge_into_their_parent() {
    let left = random_cloud(30, 40, Vector::new(2.0, 1.0, 0.5));
    let right: Vec<_> = random_cloud(31, 40, Vector::new(1.0, 3.0, 0.2))
        .into_iter()
        .map(|pt| pt + Vector::new(4.0, 1.0, -2.0))
        .collect();

    let parent = Obb::fit(&left).merged(&Obb::fit(&right)).loosened(1.0e-3);
    let rss_parent = Rss::fit(&left).merged(&Rss::fit(&right)).loosened(1.0e-3);
    let kios_parent = KIos::fit(&left).merged(&KIos::fit(&right)).loosened(1.0e-3);

    for pt in left.iter().chain(right.iter()) {
        assert!(parent.contains_point(pt));
        assert!(rss_parent.contains_point(pt));
        assert!(kios_parent.contains_point(pt));
    }
}
