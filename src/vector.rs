use std::{
    fmt::Display,
    ops::{Add, Mul, Neg},
};

use num::{BigInt, One, Zero};

/// Immutable 2D vector over arbitrary-precision integers.
///
/// Arithmetic never overflows, so the vector-space identities hold exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector2 {
    x: BigInt,
    y: BigInt,
}

impl Vector2 {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Vector2 { x: x.into(), y: y.into() }
    }

    pub fn zero() -> Self {
        Vector2 { x: BigInt::zero(), y: BigInt::zero() }
    }

    pub fn unit_x() -> Self {
        Vector2 { x: BigInt::one(), y: BigInt::zero() }
    }

    pub fn unit_y() -> Self {
        Vector2 { x: BigInt::zero(), y: BigInt::one() }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Quarter turn clockwise: `(x, y)` becomes `(y, -x)`.
    pub fn rot90cw(&self) -> Self {
        Vector2 { x: self.y.clone(), y: -&self.x }
    }
}

pub fn dot(lhs: &Vector2, rhs: &Vector2) -> BigInt {
    &lhs.x * &rhs.x + &lhs.y * &rhs.y
}

impl Add<&Vector2> for &Vector2 {
    type Output = Vector2;

    fn add(self, rhs: &Vector2) -> Vector2 {
        Vector2 { x: &self.x + &rhs.x, y: &self.y + &rhs.y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Neg for &Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2 { x: -&self.x, y: -&self.y }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2 { x: -self.x, y: -self.y }
    }
}

impl Mul<&BigInt> for &Vector2 {
    type Output = Vector2;

    fn mul(self, k: &BigInt) -> Vector2 {
        Vector2 { x: &self.x * k, y: &self.y * k }
    }
}

impl Mul<BigInt> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: BigInt) -> Vector2 {
        &self * &k
    }
}

// Scalar on the left.
impl Mul<&Vector2> for &BigInt {
    type Output = Vector2;

    fn mul(self, v: &Vector2) -> Vector2 {
        Vector2 { x: self * &v.x, y: self * &v.y }
    }
}

impl Mul<Vector2> for BigInt {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        &self * &v
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use num::BigInt;

    use super::{dot, Vector2};

    #[test]
    fn arithmetic() {
        let p = Vector2::new(1, 2);
        let q = Vector2::new(-3, 5);
        assert_eq!(&p + &q, Vector2::new(-2, 7));
        assert_eq!(-&p, Vector2::new(-1, -2));
        assert_eq!(&p * &BigInt::from(3), Vector2::new(3, 6));
        assert_eq!(BigInt::from(3) * p.clone(), p * BigInt::from(3));
    }

    #[test]
    fn rotation() {
        assert_eq!(Vector2::unit_x().rot90cw(), -Vector2::unit_y());
        assert_eq!(Vector2::unit_y().rot90cw(), Vector2::unit_x());
        assert_eq!(Vector2::new(2, 3).rot90cw(), Vector2::new(3, -2));
    }

    #[test]
    fn basis_dot() {
        assert_eq!(dot(&Vector2::unit_x(), &Vector2::unit_y()), BigInt::from(0));
        assert_eq!(dot(&Vector2::unit_x(), &Vector2::unit_x()), BigInt::from(1));
        assert_eq!(dot(&Vector2::new(1, 2), &Vector2::new(3, 4)), BigInt::from(11));
    }

    #[test]
    fn no_overflow() {
        let big = Vector2::new(i64::MAX, i64::MIN);
        let doubled = &big + &big;
        assert_eq!(doubled, &big * &BigInt::from(2));
        assert_eq!(&doubled + &(-&big), big);
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(1, -2).to_string(), "(1,-2)");
        assert_eq!(Vector2::zero().to_string(), "(0,0)");
    }
}
