use crate::bounding_volume::{KIos, Obb, ObbRss, Rss};
use crate::fitting::{BvKind, FitBoundingVolume, FitError, FittedVolume};
use crate::math::{Point, Real};
use crate::utils::{NalgebraEigenSolver, PointSet, SymmetricEigenSolver};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How the primitives of a mesh refer to its vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshTopology<'a> {
    /// Each primitive is a triangle made of three vertices.
    Triangles(&'a [[u32; 3]]),
    /// Each primitive is a single vertex: the primitive index is the vertex index.
    PointCloud,
}

impl MeshTopology<'_> {
    /// The number of vertices of one primitive.
    #[inline]
    pub fn vertices_per_primitive(&self) -> usize {
        match self {
            MeshTopology::Triangles(_) => 3,
            MeshTopology::PointCloud => 1,
        }
    }
}

/// Fits bounding volumes around subsets of the primitives of a mesh.
///
/// The fitter reads the vertices of the selected primitives directly from the
/// mesh buffers, without copying them. If a previous-frame vertex buffer is
/// set, every vertex is read at both instants so the fitted volume also
/// bounds the motion of the primitives between the two frames.
///
/// Indexed fits always use the general construction (principal axes of the
/// point set), whatever the number of primitives.
#[derive(Copy, Clone, Debug)]
pub struct IndexedFitter<'a, S = NalgebraEigenSolver> {
    vertices: &'a [Point<Real>],
    prev_vertices: Option<&'a [Point<Real>]>,
    topology: MeshTopology<'a>,
    solver: S,
}

static_assertions::assert_impl_all!(IndexedFitter<'static>: Send, Sync);

impl<'a> IndexedFitter<'a> {
    /// Creates a fitter reading from the given vertex buffer.
    pub fn new(vertices: &'a [Point<Real>], topology: MeshTopology<'a>) -> Self {
        Self {
            vertices,
            prev_vertices: None,
            topology,
            solver: NalgebraEigenSolver,
        }
    }
}

impl<'a, S> IndexedFitter<'a, S> {
    /// Replaces the eigen solver used by this fitter.
    pub fn with_solver<S2>(self, solver: S2) -> IndexedFitter<'a, S2> {
        IndexedFitter {
            vertices: self.vertices,
            prev_vertices: self.prev_vertices,
            topology: self.topology,
            solver,
        }
    }

    /// Sets the positions of the vertices at the previous frame.
    ///
    /// Fails if `prev_vertices` does not have as many vertices as the current frame.
    pub fn with_prev_vertices(mut self, prev_vertices: &'a [Point<Real>]) -> Result<Self, FitError> {
        if prev_vertices.len() != self.vertices.len() {
            log::debug!(
                "Rejecting a previous-frame buffer of {} vertices for a mesh of {} vertices.",
                prev_vertices.len(),
                self.vertices.len()
            );
            return Err(FitError::PrevVerticesLenMismatch {
                expected: self.vertices.len(),
                found: prev_vertices.len(),
            });
        }

        self.prev_vertices = Some(prev_vertices);
        Ok(self)
    }

    /// The vertices of the current frame.
    #[inline]
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.vertices
    }

    /// The vertices of the previous frame, if any.
    #[inline]
    pub fn prev_vertices(&self) -> Option<&'a [Point<Real>]> {
        self.prev_vertices
    }

    /// The topology of the mesh.
    #[inline]
    pub fn topology(&self) -> MeshTopology<'a> {
        self.topology
    }

    /// The eigen solver used by this fitter.
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// The number of primitives of the mesh.
    pub fn num_primitives(&self) -> usize {
        match self.topology {
            MeshTopology::Triangles(triangles) => triangles.len(),
            MeshTopology::PointCloud => self.vertices.len(),
        }
    }

    /// The points of the given primitives, as a point set.
    ///
    /// Fails if `primitives` is empty or refers to a primitive or a vertex
    /// that does not exist.
    pub fn points<'b>(&'b self, primitives: &'b [u32]) -> Result<IndexedPoints<'b>, FitError> {
        if let Err(err) = self.check_primitives(primitives) {
            log::debug!("Rejecting an indexed fit: {}", err);
            return Err(err);
        }

        Ok(IndexedPoints {
            vertices: self.vertices,
            prev_vertices: self.prev_vertices,
            topology: self.topology,
            primitives,
        })
    }

    fn check_primitives(&self, primitives: &[u32]) -> Result<(), FitError> {
        if primitives.is_empty() {
            return Err(FitError::EmptyPointSet);
        }

        let num_primitives = self.num_primitives();
        let num_vertices = self.vertices.len();

        for &primitive in primitives {
            if primitive as usize >= num_primitives {
                return Err(FitError::PrimitiveOutOfBounds {
                    index: primitive,
                    len: num_primitives,
                });
            }

            if let MeshTopology::Triangles(triangles) = self.topology {
                for &vid in &triangles[primitive as usize] {
                    if vid as usize >= num_vertices {
                        return Err(FitError::VertexOutOfBounds {
                            index: vid,
                            len: num_vertices,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl<S: SymmetricEigenSolver> IndexedFitter<'_, S> {
    /// Fits a bounding volume around the given primitives.
    pub fn fit<B: FitBoundingVolume>(&self, primitives: &[u32]) -> Result<B, FitError> {
        let pts = self.points(primitives)?;
        Ok(B::fit_point_set(&pts, &self.solver))
    }

    /// Fits a bounding volume of the family `kind` around the given primitives.
    pub fn fit_kind(&self, kind: BvKind, primitives: &[u32]) -> Result<FittedVolume, FitError> {
        match kind {
            BvKind::Obb => self.fit::<Obb>(primitives).map(Obb::into_fitted),
            BvKind::Rss => self.fit::<Rss>(primitives).map(Rss::into_fitted),
            BvKind::KIos => self.fit::<KIos>(primitives).map(KIos::into_fitted),
            BvKind::ObbRss => self.fit::<ObbRss>(primitives).map(ObbRss::into_fitted),
        }
    }
}

impl<S: SymmetricEigenSolver + Sync> IndexedFitter<'_, S> {
    /// Fits one bounding volume around each subset of primitives.
    ///
    /// With the `parallel` feature enabled, the subsets are fitted in parallel.
    /// Fails if any subset is invalid.
    pub fn fit_many<B>(&self, subsets: &[&[u32]]) -> Result<Vec<B>, FitError>
    where
        B: FitBoundingVolume + Send,
    {
        #[cfg(feature = "parallel")]
        {
            subsets.par_iter().map(|prims| self.fit(prims)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            subsets.iter().map(|prims| self.fit(prims)).collect()
        }
    }
}

/// The points of a subset of the primitives of a mesh.
///
/// Created with [`IndexedFitter::points`], which checks every index.
#[derive(Copy, Clone, Debug)]
pub struct IndexedPoints<'a> {
    vertices: &'a [Point<Real>],
    prev_vertices: Option<&'a [Point<Real>]>,
    topology: MeshTopology<'a>,
    primitives: &'a [u32],
}

impl IndexedPoints<'_> {
    /// Copies the visited points into a vector.
    pub fn to_vec(&self) -> Vec<Point<Real>> {
        let mut res = Vec::with_capacity(self.num_points());
        self.for_each_point(|pt| res.push(*pt));
        res
    }
}

impl PointSet for IndexedPoints<'_> {
    fn num_points(&self) -> usize {
        let num_frames = if self.prev_vertices.is_some() { 2 } else { 1 };
        self.primitives.len() * self.topology.vertices_per_primitive() * num_frames
    }

    fn for_each_point(&self, mut f: impl FnMut(&Point<Real>)) {
        let mut visit = |vid: u32| {
            f(&self.vertices[vid as usize]);

            if let Some(prev_vertices) = self.prev_vertices {
                f(&prev_vertices[vid as usize]);
            }
        };

        match self.topology {
            MeshTopology::Triangles(triangles) => {
                for &primitive in self.primitives {
                    triangles[primitive as usize].iter().for_each(|&vid| visit(vid));
                }
            }
            MeshTopology::PointCloud => self.primitives.iter().for_each(|&vid| visit(vid)),
        }
    }
}
