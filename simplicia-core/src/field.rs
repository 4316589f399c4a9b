//! Field constants for the numeric types the library computes over.
//!
//! A closed trait stands in for runtime type dispatch: requesting
//! `zero`/`unit` for an unsupported type is a compile error, not a
//! runtime failure.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A type with distinguished zero and unit values and ring arithmetic.
///
/// The graph layer only consumes the two constants (for `{0,1}`-valued
/// adjacency matrices); the arithmetic supertraits are what a sparse
/// vector/matrix layer would build on.
pub trait Field:
    Sized
    + Clone
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn unit() -> Self;
}

impl Field for i32 {
    fn zero() -> Self {
        0
    }

    fn unit() -> Self {
        1
    }
}

impl Field for i64 {
    fn zero() -> Self {
        0
    }

    fn unit() -> Self {
        1
    }
}

impl Field for f64 {
    fn zero() -> Self {
        0.0
    }

    fn unit() -> Self {
        1.0
    }
}

/// A complex number as a pair of 64-bit floats.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn modulus_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Field for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn unit() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
