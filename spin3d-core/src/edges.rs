/// Edge segments that leave room for the marker drawn at their origin
use crate::error::Result;
use crate::figure::Figure;
use crate::vertex::Vertex;

/// How far along the edge the segment reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Half of the edge. Drawn from both ends, the halves meet in the middle.
    Full,
    /// A quarter of the way from the figure center towards a vertex.
    Inner,
}

impl EdgeKind {
    fn divisor(self) -> f64 {
        match self {
            EdgeKind::Full => 2.0,
            EdgeKind::Inner => 4.0,
        }
    }
}

/// A segment in figure coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vertex,
    pub end: Vertex,
}

/// Segment from `origin` towards `target`.
///
/// With `marker` set to the radius of a disc drawn at `origin`, the near end
/// is moved to the rim of that disc as seen on screen, and the segment is
/// dropped (`Ok(None)`) when the disc covers it entirely.
pub fn clever_edge(
    origin: &Vertex,
    target: &Vertex,
    kind: EdgeKind,
    marker: Option<f64>,
) -> Result<Option<Segment>> {
    let direction = *target - *origin;
    let start = *origin + direction / kind.divisor();

    let Some(radius) = marker else {
        return Ok(Some(Segment {
            start,
            end: *origin,
        }));
    };

    let mut rim = direction.normalized()?;
    if rim.y() > 0.0 {
        // behind the marker: stretch to the disc outline in the projection plane
        let planar = rim.x().hypot(rim.z());
        if planar < f64::EPSILON {
            return Ok(None);
        }
        rim = rim / planar;
    }
    let rim = rim * radius;

    if rim.magnitude() < direction.magnitude() {
        Ok(Some(Segment {
            start,
            end: *origin + rim,
        }))
    } else {
        Ok(None)
    }
}

/// Segments from `origin` to every figure vertex apart from `origin` itself.
pub fn edges_from(
    figure: &Figure,
    origin: &Vertex,
    kind: EdgeKind,
    marker: Option<f64>,
) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    for vertex in figure.iter().filter(|v| *v != origin) {
        if let Some(segment) = clever_edge(origin, vertex, kind, marker)? {
            segments.push(segment);
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_without_marker() {
        let origin = Vertex::new(10.0, 0.0, 0.0);
        let target = Vertex::new(10.0, -8.0, 40.0);

        let full = clever_edge(&origin, &target, EdgeKind::Full, None).unwrap().unwrap();
        assert_eq!(full.start, Vertex::new(10.0, -4.0, 20.0));
        assert_eq!(full.end, origin);

        let inner = clever_edge(&origin, &target, EdgeKind::Inner, None).unwrap().unwrap();
        assert_eq!(inner.start, Vertex::new(10.0, -2.0, 10.0));
    }

    #[test]
    fn test_marker_in_front() {
        let segment = clever_edge(
            &Vertex::origin(),
            &Vertex::new(0.0, -30.0, 40.0),
            EdgeKind::Inner,
            Some(10.0),
        )
        .unwrap()
        .unwrap();
        assert_eq!(segment.start, Vertex::new(0.0, -7.5, 10.0));
        assert_eq!(segment.end, Vertex::new(0.0, -6.0, 8.0));
    }

    #[test]
    fn test_marker_behind_is_stretched() {
        let segment = clever_edge(
            &Vertex::origin(),
            &Vertex::new(0.0, 30.0, 40.0),
            EdgeKind::Full,
            Some(10.0),
        )
        .unwrap()
        .unwrap();
        // the projected end sits on the disc outline
        assert_eq!(segment.end, Vertex::new(0.0, 7.5, 10.0));
        let (x, z) = segment.end.projection();
        assert!((x.hypot(z) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_edge_hidden_by_marker() {
        let hidden = clever_edge(
            &Vertex::origin(),
            &Vertex::new(3.0, 0.0, 4.0),
            EdgeKind::Full,
            Some(10.0),
        )
        .unwrap();
        assert_eq!(hidden, None);

        let straight_back = clever_edge(
            &Vertex::origin(),
            &Vertex::new(0.0, 50.0, 0.0),
            EdgeKind::Full,
            Some(10.0),
        )
        .unwrap();
        assert_eq!(straight_back, None);
    }

    #[test]
    fn test_zero_length_edge_with_marker() {
        let v = Vertex::new(1.0, 2.0, 3.0);
        assert_eq!(
            clever_edge(&v, &v, EdgeKind::Full, Some(5.0)),
            Err(GeometryError::ZeroLengthVector)
        );
        assert!(clever_edge(&v, &v, EdgeKind::Full, None).unwrap().is_some());
    }

    #[test]
    fn test_edges_from_skips_origin() {
        let tetra = Figure::tetrahedron(200.0);
        let origin = tetra.vertices()[0];
        let full = edges_from(&tetra, &origin, EdgeKind::Full, None).unwrap();
        assert_eq!(full.len(), 3);

        let inner = edges_from(&tetra, &Vertex::origin(), EdgeKind::Inner, Some(10.0)).unwrap();
        assert_eq!(inner.len(), 4);
        for segment in inner {
            assert!(segment.end.magnitude() >= 10.0 - 1e-9);
        }
    }
}
