/// Euler angles and the rotation matrices built from them
use nalgebra::{Matrix3, Vector3};
use std::ops::{Add, Div, Neg, Sub};

use crate::error::{GeometryError, Result};

/// Euler angle triple (in radians) together with its rotation matrix.
///
/// The matrix is computed once on construction. Angles are never mutated in
/// place: every operation builds a new `Angle`, so the matrix always matches
/// the components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    alpha: f64,
    beta: f64,
    gamma: f64,
    matrix: Matrix3<f64>,
}

impl Angle {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let (sg, cg) = gamma.sin_cos();

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            ca * cg - cb * sa * sg, -cg * sa - ca * cb * sg,  sb * sg,
            cb * cg * sa + ca * sg,  ca * cb * cg - sa * sg, -cg * sb,
            sa * sb,                 ca * sb,                 cb,
        );

        Self {
            alpha,
            beta,
            gamma,
            matrix,
        }
    }

    /// The identity rotation.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn components(&self) -> (f64, f64, f64) {
        (self.alpha, self.beta, self.gamma)
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn rotate_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * vector
    }

    /// Matrix of rotating by `self` first and by `next` afterwards.
    ///
    /// This is generally different from the matrix of `self + next`: Euler
    /// angles do not add under composition.
    pub fn then(&self, next: &Angle) -> Matrix3<f64> {
        next.matrix * self.matrix
    }

    /// Checked division of every component.
    pub fn divide_by(&self, divisor: f64) -> Result<Angle> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(*self / divisor)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::new(
            self.alpha + other.alpha,
            self.beta + other.beta,
            self.gamma + other.gamma,
        )
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::new(-self.alpha, -self.beta, -self.gamma)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        self + (-other)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, divisor: f64) -> Angle {
        Angle::new(self.alpha / divisor, self.beta / divisor, self.gamma / divisor)
    }
}
