/// spin3d core library - geometry of the rotating figures
///
/// This library holds the stateful geometry engine: vertex and Euler angle
/// algebra, the tetrahedron and cube figures with their face visibility, the
/// depth shading of colors, and the drifting rotation that animates them.
/// Drawing is left to the caller, which only needs projected points.

pub mod angle;
pub mod edges;
pub mod error;
pub mod face;
pub mod figure;
pub mod projection;
pub mod shade;
pub mod spin;
pub mod vertex;

// Re-export commonly used types
pub use angle::Angle;
pub use edges::{clever_edge, edges_from, EdgeKind, Segment};
pub use error::{GeometryError, Result};
pub use face::Face;
pub use figure::{Figure, Shape};
pub use projection::Viewport;
pub use shade::{shade, Rgb};
pub use spin::{Spin, SpinConfig};
pub use vertex::{near, Axis, Vertex, EPS};
