/*
 * Vector Module
 *
 * This module defines the Vector2 value type used for every position,
 * velocity and steering adjustment in the simulation.
 * All operations return a new vector; nothing mutates in place except the
 * compound assignment operators.
 */

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, k: f32) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    // Zero vector is returned unchanged
    #[inline]
    pub fn normalize(self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            self
        } else {
            self.scale(1.0 / magnitude)
        }
    }

    #[inline]
    pub fn distance(self, other: Vector2) -> f32 {
        self.sub(other).magnitude()
    }

    // Rescale to `max` if longer than `max`, keeping the direction
    pub fn limit(self, max: f32) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude > max {
            self.scale(max / magnitude)
        } else {
            self
        }
    }

    // Angle in radians; 0.0 for the zero vector
    pub fn heading(self) -> f32 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        self.scale(rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_gives_unit_length() {
        let samples = [
            Vector2::new(3.0, 4.0),
            Vector2::new(-0.001, 0.0),
            Vector2::new(1234.5, -987.0),
            Vector2::new(0.0, -7.0),
        ];
        for v in samples {
            assert!((v.normalize().magnitude() - 1.0).abs() < EPS, "{v:?}");
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn operations_return_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, 6.0);
        assert_eq!(a.add(b), Vector2::new(5.0, 8.0));
        assert_eq!(b.sub(a), Vector2::new(3.0, 4.0));
        assert_eq!(a.scale(3.0), Vector2::new(3.0, 6.0));
        assert_eq!(a.distance(b), 5.0);
        // Inputs are untouched
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn limit_preserves_direction() {
        let v = Vector2::new(30.0, 40.0).limit(10.0);
        assert!((v.magnitude() - 10.0).abs() < EPS);
        assert!((v.x - 6.0).abs() < EPS && (v.y - 8.0).abs() < EPS);

        let short = Vector2::new(1.0, 1.0);
        assert_eq!(short.limit(10.0), short);
    }

    #[test]
    fn heading_of_zero_is_default() {
        assert_eq!(Vector2::ZERO.heading(), 0.0);
        assert!((Vector2::new(0.0, 1.0).heading() - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert!((Vector2::new(-1.0, 0.0).heading().abs() - std::f32::consts::PI).abs() < EPS);
    }

    #[test]
    fn nan_propagates() {
        let v = Vector2::new(f32::NAN, 1.0);
        assert!(v.magnitude().is_nan());
        assert!(v.add(Vector2::new(1.0, 1.0)).x.is_nan());
    }
}
