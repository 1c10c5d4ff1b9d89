/// Mapping of projected points onto a 2D canvas
use crate::vertex::Vertex;

/// Canvas placement of the projection plane.
///
/// The origin of the figure lands on `(center_x, center_y)`. Canvas `y` grows
/// downwards, so projected `z` is flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Viewport {
    /// Unit-scale viewport centred on a `width` x `height` canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Canvas position of a projected `(x, z)` pair.
    pub fn to_canvas(&self, (x, z): (f64, f64)) -> (f64, f64) {
        (self.center_x + x * self.scale_x, self.center_y - z * self.scale_y)
    }

    pub fn project(&self, vertex: &Vertex) -> (f64, f64) {
        self.to_canvas(vertex.projection())
    }

    /// Bounding box `(left, top, right, bottom)` of a circle of radius `r`
    /// (in figure units) around `vertex`.
    pub fn circle(&self, vertex: &Vertex, r: f64) -> (f64, f64, f64, f64) {
        let (x, y) = self.project(vertex);
        let (rx, ry) = (r * self.scale_x.abs(), r * self.scale_y.abs());
        (x - rx, y - ry, x + rx, y + ry)
    }

    /// Canvas outline of a polygon.
    pub fn polygon<'a, I>(&self, vertices: I) -> Vec<(f64, f64)>
    where
        I: IntoIterator<Item = &'a Vertex>,
    {
        vertices.into_iter().map(|v| self.project(v)).collect()
    }
}

impl Default for Viewport {
    /// The 900 x 850 canvas of the desktop version.
    fn default() -> Self {
        Self::new(900.0, 850.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let viewport = Viewport::default();
        assert_eq!(viewport.project(&Vertex::origin()), (450.0, 425.0));
        assert_eq!(viewport.project(&Vertex::new(10.0, 99.0, 20.0)), (460.0, 405.0));
    }

    #[test]
    fn test_scaled_projection() {
        let viewport = Viewport::new(80.0, 24.0).with_scale(0.1, 0.05);
        assert_eq!(viewport.project(&Vertex::new(100.0, 0.0, 100.0)), (50.0, 7.0));
    }

    #[test]
    fn test_circle() {
        let viewport = Viewport::default();
        assert_eq!(
            viewport.circle(&Vertex::origin(), 5.0),
            (445.0, 420.0, 455.0, 430.0)
        );
    }

    #[test]
    fn test_polygon_keeps_order() {
        let viewport = Viewport::new(0.0, 0.0);
        let square = [
            Vertex::new(1.0, 0.0, 1.0),
            Vertex::new(-1.0, 0.0, 1.0),
            Vertex::new(-1.0, 0.0, -1.0),
        ];
        assert_eq!(
            viewport.polygon(&square),
            vec![(1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)]
        );
    }
}
