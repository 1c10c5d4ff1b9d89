/// Rotatable polyhedra
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

use crate::angle::Angle;
use crate::error::GeometryError;
use crate::face::Face;
use crate::vertex::Vertex;

/// Vertex groups of the cube faces, in drawing order.
const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [5, 1, 3, 7],
    [4, 6, 7, 5],
    [4, 0, 2, 6],
    [6, 2, 3, 7],
    [4, 0, 1, 5],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Tetrahedron,
    Cube,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Tetrahedron => f.write_str("tetrahedron"),
            Shape::Cube => f.write_str("cube"),
        }
    }
}

impl FromStr for Shape {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tetrahedron" | "tetra" => Ok(Shape::Tetrahedron),
            "cube" => Ok(Shape::Cube),
            _ => Err(GeometryError::UnknownShape(s.to_string())),
        }
    }
}

/// A polyhedron centred on the origin.
///
/// The figure owns its vertices; faces refer to them by index. The scale is
/// not validated: zero collapses the figure into the origin and negative
/// values mirror it.
#[derive(Debug, Clone)]
pub struct Figure {
    shape: Shape,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
}

impl Figure {
    pub fn new(shape: Shape, scale: f64) -> Self {
        match shape {
            Shape::Tetrahedron => Self::tetrahedron(scale),
            Shape::Cube => Self::cube(scale),
        }
    }

    /// Regular tetrahedron with edge length `2 * scale`.
    ///
    /// Faces are all vertex triples in lexicographic order; the last one,
    /// `(1, 2, 3)`, is never drawn.
    pub fn tetrahedron(scale: f64) -> Self {
        let h = 1.0 / 2.0_f64.sqrt();
        let vertices: Vec<Vertex> = [
            (1.0, 0.0, -h),
            (-1.0, 0.0, -h),
            (0.0, 1.0, h),
            (0.0, -1.0, h),
        ]
        .iter()
        .enumerate()
        .map(|(nu, &(x, y, z))| Vertex::tagged(x, y, z, nu) * scale)
        .collect();

        let faces = combinations(vertices.len(), 3)
            .into_iter()
            .map(|indices| Face::new(indices, &vertices))
            .collect();

        Self::assemble(Shape::Tetrahedron, vertices, faces)
    }

    /// Axis-aligned cube with edge length `2 * scale`; the last face is never
    /// drawn.
    pub fn cube(scale: f64) -> Self {
        let signs = [1.0, -1.0];
        let mut vertices = Vec::with_capacity(8);
        for &x in &signs {
            for &y in &signs {
                for &z in &signs {
                    vertices.push(Vertex::tagged(x, y, z, vertices.len()) * scale);
                }
            }
        }

        let faces = CUBE_FACES
            .iter()
            .map(|indices| Face::new(indices.to_vec(), &vertices))
            .collect();

        Self::assemble(Shape::Cube, vertices, faces)
    }

    fn assemble(shape: Shape, vertices: Vec<Vertex>, mut faces: Vec<Face>) -> Self {
        if let Some(last) = faces.last_mut() {
            last.hide_always();
        }
        debug!(
            "built {} with {} vertices and {} faces",
            shape,
            vertices.len(),
            faces.len()
        );
        Self {
            shape,
            vertices,
            faces,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Vertices of `face` in drawing order.
    pub fn face_vertices<'a>(&'a self, face: &'a Face) -> impl Iterator<Item = &'a Vertex> + 'a {
        face.indices().iter().map(move |&i| &self.vertices[i])
    }

    /// Rotate every vertex, then every face vector.
    pub fn rotate(&mut self, angle: &Angle) -> &mut Self {
        trace!("rotating {} by {:?}", self.shape, angle.components());
        for vertex in &mut self.vertices {
            vertex.rotate(angle);
        }
        for face in &mut self.faces {
            face.rotate(angle);
        }
        self
    }

    /// Which vertices should get a marker.
    ///
    /// With faces drawn only the vertices of visible faces are shown,
    /// otherwise every vertex is.
    pub fn visible_vertices(&self, faces_drawn: bool) -> Vec<bool> {
        if !faces_drawn {
            return vec![true; self.vertices.len()];
        }
        let mut visible = vec![false; self.vertices.len()];
        for face in self.faces.iter().filter(|face| face.visible()) {
            for &i in face.indices() {
                visible[i] = true;
            }
        }
        visible
    }
}

impl<'a> IntoIterator for &'a Figure {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// All `k`-element index combinations of `0..n`, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn extend(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            extend(i + 1, n, k, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, n, k, &mut Vec::with_capacity(k), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations() {
        assert_eq!(
            combinations(4, 3),
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
        assert!(combinations(2, 3).is_empty());
    }

    #[test]
    fn test_tetrahedron_structure() {
        let tetra = Figure::tetrahedron(1.0);
        assert_eq!(tetra.vertices().len(), 4);
        assert_eq!(tetra.faces().len(), 4);
        assert_eq!(tetra.faces()[3].indices(), &[1, 2, 3]);
        let hidden: Vec<_> = tetra.faces().iter().map(Face::always_invisible).collect();
        assert_eq!(hidden, vec![false, false, false, true]);
        for (nu, vertex) in tetra.iter().enumerate() {
            assert_eq!(vertex.nu(), nu);
        }
    }

    #[test]
    fn test_tetrahedron_is_regular() {
        let tetra = Figure::tetrahedron(3.0);
        let v = tetra.vertices();
        for i in 0..4 {
            for j in i + 1..4 {
                assert!(((v[i] - v[j]).magnitude() - 6.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cube_structure() {
        let cube = Figure::cube(1.0);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 6);
        assert_eq!(cube.vertices()[0], Vertex::new(1.0, 1.0, 1.0));
        assert_eq!(cube.vertices()[3], Vertex::new(1.0, -1.0, -1.0));
        assert_eq!(cube.vertices()[7], Vertex::new(-1.0, -1.0, -1.0));
        assert_eq!(cube.vertices()[5].nu(), 5);
        let hidden = cube.faces().iter().filter(|f| f.always_invisible()).count();
        assert_eq!(hidden, 1);
        assert!(cube.faces()[5].always_invisible());
    }

    #[test]
    fn test_cube_faces_are_planar_squares() {
        let cube = Figure::cube(1.0);
        for face in cube.faces() {
            let corners: Vec<_> = cube.face_vertices(face).copied().collect();
            // consecutive corners are joined by an edge of length 2
            for i in 0..4 {
                let edge = corners[(i + 1) % 4] - corners[i];
                assert!((edge.magnitude() - 2.0).abs() < 1e-9);
            }
            // face vector points along one axis, out of the face
            assert!((face.vector().magnitude() - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_face_vertices_order() {
        let cube = Figure::cube(2.0);
        let nus: Vec<_> = cube.face_vertices(&cube.faces()[1]).map(Vertex::nu).collect();
        assert_eq!(nus, vec![5, 1, 3, 7]);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        for shape in [Shape::Tetrahedron, Shape::Cube] {
            let original = Figure::new(shape, 200.0);
            let mut rotated = original.clone();
            rotated.rotate(&Angle::zero());
            for (a, b) in original.iter().zip(&rotated) {
                assert_eq!(a, b);
            }
            for (a, b) in original.faces().iter().zip(rotated.faces()) {
                assert_eq!(a.vector(), b.vector());
            }
        }
    }

    #[test]
    fn test_rotate_chains() {
        let a = Angle::new(0.2, 0.3, 0.4);
        let b = Angle::new(-0.1, 0.5, 0.05);
        let original = Figure::cube(50.0);
        let mut cube = original.clone();
        cube.rotate(&a).rotate(&b);

        let composed = a.then(&b);
        for (before, after) in original.iter().zip(&cube) {
            let expected = composed * before.as_vector();
            assert!((after.as_vector() - expected).norm() < 1e-9);
        }
    }

    #[test]
    fn test_face_vector_tracks_vertices() {
        let mut tetra = Figure::tetrahedron(10.0);
        tetra.rotate(&Angle::new(0.7, -0.4, 1.9));
        for face in tetra.faces() {
            let resummed: Vertex = tetra.face_vertices(face).sum();
            assert_eq!(*face.vector(), resummed);
        }
    }

    #[test]
    fn test_visible_vertices() {
        let mut cube = Figure::cube(1.0);
        assert_eq!(cube.visible_vertices(false), vec![true; 8]);

        // every face starts visible until the first rotation
        assert_eq!(cube.visible_vertices(true), vec![true; 8]);

        cube.rotate(&Angle::zero());
        // only (6, 2, 3, 7) faces the viewer
        let visible = cube.visible_vertices(true);
        let expected: Vec<bool> = (0..8).map(|i| [2, 3, 6, 7].contains(&i)).collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("cube".parse::<Shape>(), Ok(Shape::Cube));
        assert_eq!("Tetrahedron".parse::<Shape>(), Ok(Shape::Tetrahedron));
        assert_eq!(
            "sphere".parse::<Shape>(),
            Err(GeometryError::UnknownShape("sphere".to_string()))
        );
        assert_eq!(Shape::Cube.to_string(), "cube");
    }

    #[test]
    fn test_display_lists_vertices() {
        let text = Figure::cube(1.0).to_string();
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().next(), Some("(x: 1, y: 1, z: 1)"));
    }

    #[test]
    fn test_degenerate_scale() {
        let flat = Figure::tetrahedron(0.0);
        assert!(flat.iter().all(|v| *v == Vertex::origin()));

        let mirrored = Figure::cube(-1.0);
        assert_eq!(mirrored.vertices()[0], Vertex::new(-1.0, -1.0, -1.0));
    }
}
