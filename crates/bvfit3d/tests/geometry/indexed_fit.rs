use crate::common::random_cloud;
use bvfit3d::bounding_volume::{BoundingVolume, KIos, Obb, Rss};
use bvfit3d::fitting::{BvKind, FitBoundingVolume, FitError, FittedVolume, IndexedFitter, MeshTopology};
use bvfit3d::math::{Real, Vector};
use bvfit3d::utils::{NalgebraEigenSolver, PointSet};

const KINDS: [BvKind; 4] = [BvKind::Obb, BvKind::Rss, BvKind::KIos, BvKind::ObbRss];

#[test]
fn point_cloud_fit_matches_the_general_path() {
    let vertices = random_cloud(50, 30, Vector::new(3.0, 1.0, 0.5));
    let fitter = IndexedFitter::new(&vertices, MeshTopology::PointCloud);
    let primitives: Vec<u32> = (0..30).step_by(2).collect();

    let pts = fitter.points(&primitives).unwrap();
    let materialized = pts.to_vec();
    assert_eq!(materialized.len(), 15);

    for kind in KINDS {
        let indexed = fitter.fit_kind(kind, &primitives).unwrap();
        let direct = FittedVolume::fit(kind, &materialized);
        assert_eq!(indexed, direct);
    }
}

#[test]
fn small_subsets_use_the_general_path() {
    let vertices = random_cloud(51, 6, Vector::new(1.0, 1.0, 1.0));
    let fitter = IndexedFitter::new(&vertices, MeshTopology::PointCloud);
    let primitives = [0, 1, 2, 3, 4, 5];

    let pts = fitter.points(&primitives).unwrap();
    let indexed: KIos = fitter.fit(&primitives).unwrap();
    assert_eq!(indexed, KIos::fit_point_set(&pts, &NalgebraEigenSolver));
}

#[test]
fn swept_triangles_are_bounded_at_both_instants() {
    let vertices = random_cloud(52, 40, Vector::new(2.0, 2.0, 2.0));
    let prev: Vec<_> = vertices
        .iter()
        .map(|pt| pt - Vector::new(1.0, 0.5, 0.0))
        .collect();
    let triangles: Vec<[u32; 3]> = (0..13u32).map(|i| [3 * i, 3 * i + 1, 3 * i + 2]).collect();

    let fitter = IndexedFitter::new(&vertices, MeshTopology::Triangles(&triangles))
        .with_prev_vertices(&prev)
        .unwrap();
    let primitives = [0, 4, 5, 9, 12];
    assert_eq!(fitter.points(&primitives).unwrap().num_points(), 30);

    let obb: Obb = fitter.fit(&primitives).unwrap();
    let rss: Rss = fitter.fit(&primitives).unwrap();
    let tolerance: Real = 1.0e-3;

    for &prim in &primitives {
        for &vid in &triangles[prim as usize] {
            for pt in [&vertices[vid as usize], &prev[vid as usize]] {
                assert!(obb.loosened(tolerance).contains_point(pt));
                assert!(rss.loosened(tolerance).contains_point(pt));
            }
        }
    }
}

#[test]
fn invalid_subsets_are_rejected() {
    let vertices = random_cloud(53, 4, Vector::new(1.0, 1.0, 1.0));
    let fitter = IndexedFitter::new(&vertices, MeshTopology::PointCloud);

    assert_eq!(
        fitter.fit_kind(BvKind::Rss, &[1, 4]),
        Err(FitError::PrimitiveOutOfBounds { index: 4, len: 4 })
    );
    assert_eq!(
        fitter.fit_kind(BvKind::Obb, &[]),
        Err(FitError::EmptyPointSet)
    );
}
