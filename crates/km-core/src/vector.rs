//! Cartesian 3-D vector used for both positions and velocities.
//!
//! Coordinates are `f64` metres (positions) or metres per second
//! (velocities).  The arithmetic surface is deliberately small: what the
//! pairwise queries and the reference motion models need, nothing more.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::CoreError;

/// A point or displacement in 3-D space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// The origin / the zero velocity.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// 3-D Euclidean distance between two points.
///
/// Exactly `0.0` when `a == b`.
#[inline]
pub fn distance(a: Vector, b: Vector) -> f64 {
    (b - a).length()
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Formats as `x:y:z`, the textual form accepted by [`FromStr`].
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.x, self.y, self.z)
    }
}

/// Parses `x:y:z`.  A two-component `x:y` is accepted with `z = 0`.
impl FromStr for Vector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(CoreError::Parse(format!("expected x:y:z, got {s:?}")));
        }
        let mut coords = [0.0f64; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse()
                .map_err(|_| CoreError::Parse(format!("bad vector component {part:?} in {s:?}")))?;
        }
        Ok(Vector::new(coords[0], coords[1], coords[2]))
    }
}
