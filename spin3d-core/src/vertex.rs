/// Points and vectors in R^3
use nalgebra::Vector3;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::error::{GeometryError, Result};

/// Tolerance used by the approximate equality of vertices.
pub const EPS: f64 = 0.005;

/// Named coordinate axis. `Y` is the depth axis: it points away from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A vertex of a figure, also used as a plain 3D vector.
///
/// `nu` is the position of the vertex in its figure's vertex list. Arithmetic
/// keeps the tag of the vertex operand (the left one for binary operations).
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    position: Vector3<f64>,
    nu: usize,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::tagged(x, y, z, 0)
    }

    pub fn tagged(x: f64, y: f64, z: f64, nu: usize) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            nu,
        }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub(crate) fn from_vector(position: Vector3<f64>, nu: usize) -> Self {
        Self { position, nu }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        self.position[axis.index()]
    }

    pub fn nu(&self) -> usize {
        self.nu
    }

    pub fn with_nu(mut self, nu: usize) -> Self {
        self.nu = nu;
        self
    }

    pub fn as_vector(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Coordinates in x, y, z order.
    pub fn coords(&self) -> impl Iterator<Item = f64> + '_ {
        self.position.iter().copied()
    }

    /// Rotate in place by the angle's rotation matrix.
    pub fn rotate(&mut self, angle: &Angle) {
        self.position = angle.rotate_vector(&self.position);
    }

    pub fn add(&self, other: &Vertex) -> Vertex {
        Vertex::from_vector(self.position + other.position, self.nu)
    }

    pub fn subtract(&self, other: &Vertex) -> Vertex {
        Vertex::from_vector(self.position - other.position, self.nu)
    }

    pub fn negate(&self) -> Vertex {
        Vertex::from_vector(-self.position, self.nu)
    }

    pub fn scale(&self, factor: f64) -> Vertex {
        Vertex::from_vector(self.position * factor, self.nu)
    }

    /// Checked scalar division. The `/` operator divides unconditionally.
    pub fn divide_by(&self, divisor: f64) -> Result<Vertex> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Vertex::from_vector(self.position / divisor, self.nu))
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.position.norm()
    }

    /// Unit vector pointing the same way.
    pub fn normalized(&self) -> Result<Vertex> {
        let length = self.magnitude();
        if length < f64::EPSILON {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(Vertex::from_vector(self.position / length, self.nu))
    }

    /// Screen projection: the depth axis `y` is dropped, `(x, z)` is kept.
    pub fn projection(&self) -> (f64, f64) {
        (self.position.x, self.position.z)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::origin()
    }
}

/// `true` when the two vertices are closer than [`EPS`].
pub fn near(a: &Vertex, b: &Vertex) -> bool {
    a.subtract(b).magnitude() < EPS
}

/// Approximate equality, see [`near`].
///
/// This relation is not transitive: `a == b` and `b == c` do not imply
/// `a == c` once the distances add up past [`EPS`]. The `nu` tag is ignored.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        near(self, other)
    }
}

impl Add for Vertex {
    type Output = Vertex;

    fn add(self, other: Vertex) -> Vertex {
        Vertex::add(&self, &other)
    }
}

impl Sub for Vertex {
    type Output = Vertex;

    fn sub(self, other: Vertex) -> Vertex {
        self.subtract(&other)
    }
}

impl Neg for Vertex {
    type Output = Vertex;

    fn neg(self) -> Vertex {
        self.negate()
    }
}

impl Mul<f64> for Vertex {
    type Output = Vertex;

    fn mul(self, factor: f64) -> Vertex {
        self.scale(factor)
    }
}

impl Mul<Vertex> for f64 {
    type Output = Vertex;

    fn mul(self, vertex: Vertex) -> Vertex {
        vertex.scale(self)
    }
}

impl Div<f64> for Vertex {
    type Output = Vertex;

    fn div(self, divisor: f64) -> Vertex {
        Vertex::from_vector(self.position / divisor, self.nu)
    }
}

impl Sum for Vertex {
    fn sum<I: Iterator<Item = Vertex>>(iter: I) -> Vertex {
        iter.fold(Vertex::origin(), |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vertex> for Vertex {
    fn sum<I: Iterator<Item = &'a Vertex>>(iter: I) -> Vertex {
        iter.copied().sum()
    }
}

impl Index<usize> for Vertex {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.position[index]
    }
}

impl Index<Axis> for Vertex {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.position[axis.index()]
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {}, y: {}, z: {})",
            self.position.x, self.position.y, self.position.z
        )
    }
}
