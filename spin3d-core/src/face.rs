/// Faces of a figure
use crate::angle::Angle;
use crate::shade::Rgb;
use crate::vertex::Vertex;

/// Color of a face seen from outside the figure.
pub const DEFAULT_INNER_COLOR: Rgb = Rgb::new(0x50, 0xc8, 0x78);
/// Color of a face seen through the figure, from its back side.
pub const DEFAULT_OUTER_COLOR: Rgb = Rgb::new(0x30, 0x30, 0x30);

/// A planar face of a figure.
///
/// The face refers to its vertices by index into the owning figure's vertex
/// list. `vector` starts as the sum of those vertices and is rotated together
/// with the figure; it is never re-derived from the vertices afterwards.
#[derive(Debug, Clone)]
pub struct Face {
    indices: Vec<usize>,
    vector: Vertex,
    visible: bool,
    always_invisible: bool,
    colors: (Rgb, Rgb),
}

impl Face {
    /// Build a face from vertex indices into `vertices`, in drawing order.
    ///
    /// Panics if an index is out of bounds.
    pub fn new(indices: Vec<usize>, vertices: &[Vertex]) -> Self {
        let vector = indices.iter().map(|&i| vertices[i]).sum();
        Self {
            indices,
            vector,
            visible: true,
            always_invisible: false,
            colors: (DEFAULT_INNER_COLOR, DEFAULT_OUTER_COLOR),
        }
    }

    pub fn with_colors(mut self, inner: Rgb, outer: Rgb) -> Self {
        self.colors = (inner, outer);
        self
    }

    pub(crate) fn hide_always(&mut self) {
        self.always_invisible = true;
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn vector(&self) -> &Vertex {
        &self.vector
    }

    /// `true` when the face looks towards the viewer (negative depth).
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn always_invisible(&self) -> bool {
        self.always_invisible
    }

    pub fn colors(&self) -> (Rgb, Rgb) {
        self.colors
    }

    pub fn rotate(&mut self, angle: &Angle) {
        self.vector.rotate(angle);
        self.visible = self.vector.y() < 0.0;
    }

    /// Fill color shaded by the height of the face vector.
    ///
    /// Faces on the back side are darkened at half the rate, in the opposite
    /// direction.
    pub fn color(&self) -> Rgb {
        let (base, factor) = if self.vector.y() < 0.0 {
            (self.colors.0, 1.0)
        } else {
            (self.colors.1, -0.5)
        };
        base.shade(self.vector.z() * factor)
    }
}
