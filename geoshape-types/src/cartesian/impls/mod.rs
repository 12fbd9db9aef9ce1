use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num: Float> Point2<Num> {
    /// Point in the middle of the segment between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = Num::one() + Num::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num
    where
        Num: Float,
    {
        self.magnitude_sq().sqrt()
    }

    /// Z component of the cross product of two vectors lying in the XY plane.
    ///
    /// Positive when `other` points to the left of `self` in a y-up coordinate system.
    pub fn perp_dot(&self, other: &Self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * other.dy - self.dy * other.dx
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num> std::ops::Sub<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn sub(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num> RelativeEq for Point2<Num>
where
    Num: RelativeEq<Num, Epsilon = Num> + Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        Num::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

/// A point in 3-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point3<Num = f64> {
    x: Num,
    y: Num,
    z: Num,
}

impl<Num> Point3<Num> {
    /// Creates a new instance of the point by its coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 3]
    where
        Num: Copy,
    {
        [self.x, self.y, self.z]
    }
}

impl<Num: Float> Point3<Num> {
    /// Point at the end of the vector `v` starting at the coordinate origin.
    pub fn from_vector(v: Vector3<Num>) -> Self {
        Self {
            x: v.dx,
            y: v.dy,
            z: v.dz,
        }
    }

    /// Vector from the coordinate origin to the point.
    pub fn to_vector(&self) -> Vector3<Num> {
        Vector3 {
            dx: self.x,
            dy: self.y,
            dz: self.z,
        }
    }

    /// Point in the middle of the straight segment between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        let two = Num::one() + Num::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
            z: (self.z + other.z) / two,
        }
    }
}

/// Vector between two points in 3-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector3<Num = f64> {
    dx: Num,
    dy: Num,
    dz: Num,
}

impl<Num: Copy> Vector3<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num, dz: Num) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns z coordinate of the vector.
    pub fn dz(&self) -> Num {
        self.dz
    }

    /// Updates x coordinate of the vector.
    pub fn set_dx(&mut self, dx: Num) {
        self.dx = dx;
    }

    /// Updates y coordinate of the vector.
    pub fn set_dy(&mut self, dy: Num) {
        self.dy = dy;
    }

    /// Updates z coordinate of the vector.
    pub fn set_dz(&mut self, dz: Num) {
        self.dz = dz;
    }
}

impl<Num: Float> Vector3<Num> {
    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num {
        self.dot(self)
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num {
        self.magnitude_sq().sqrt()
    }

    /// Scalar product.
    pub fn dot(&self, other: &Self) -> Num {
        self.dx * other.dx + self.dy * other.dy + self.dz * other.dz
    }

    /// Vector product.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            dx: self.dy * other.dz - self.dz * other.dy,
            dy: self.dz * other.dx - self.dx * other.dz,
            dz: self.dx * other.dy - self.dy * other.dx,
        }
    }

    /// Vector of unit length with the same direction.
    ///
    /// The zero vector has no direction, normalizing it gives NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }
}

impl<Num> std::ops::Sub<Point3<Num>> for Point3<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector3<Num>;

    fn sub(self, rhs: Point3<Num>) -> Self::Output {
        Vector3 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
            dz: self.z - rhs.z,
        }
    }
}

impl<Num> std::ops::Add<Vector3<Num>> for Point3<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point3<Num>;

    fn add(self, rhs: Vector3<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
            z: self.z + rhs.dz,
        }
    }
}

impl<Num> std::ops::Sub<Vector3<Num>> for Point3<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Point3<Num>;

    fn sub(self, rhs: Vector3<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
            z: self.z - rhs.dz,
        }
    }
}

impl<Num> std::ops::Add<Vector3<Num>> for Vector3<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Vector3<Num>;

    fn add(self, rhs: Vector3<Num>) -> Self::Output {
        Self {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
            dz: self.dz + rhs.dz,
        }
    }
}

impl<Num> std::ops::Sub<Vector3<Num>> for Vector3<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector3<Num>;

    fn sub(self, rhs: Vector3<Num>) -> Self::Output {
        Self {
            dx: self.dx - rhs.dx,
            dy: self.dy - rhs.dy,
            dz: self.dz - rhs.dz,
        }
    }
}

impl<Num> std::ops::Neg for Vector3<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vector3<Num>;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector3<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector3<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
            dz: self.dz * rhs,
        }
    }
}

impl<Num> std::ops::Div<Num> for Vector3<Num>
where
    Num: std::ops::Div<Num, Output = Num> + Copy,
{
    type Output = Vector3<Num>;

    fn div(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx / rhs,
            dy: self.dy / rhs,
            dz: self.dz / rhs,
        }
    }
}

impl<Num: nalgebra::Scalar + Copy> From<Vector3<Num>> for nalgebra::Vector3<Num> {
    fn from(v: Vector3<Num>) -> Self {
        nalgebra::Vector3::new(v.dx, v.dy, v.dz)
    }
}

impl<Num: nalgebra::Scalar + Copy> From<nalgebra::Vector3<Num>> for Vector3<Num> {
    fn from(v: nalgebra::Vector3<Num>) -> Self {
        Self {
            dx: v.x,
            dy: v.y,
            dz: v.z,
        }
    }
}

impl<Num: nalgebra::Scalar + Copy> From<Point3<Num>> for nalgebra::Point3<Num> {
    fn from(p: Point3<Num>) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl<Num: nalgebra::Scalar + Copy> From<nalgebra::Point3<Num>> for Point3<Num> {
    fn from(p: nalgebra::Point3<Num>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl<Num> AbsDiffEq for Point3<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<Num> RelativeEq for Point3<Num>
where
    Num: RelativeEq<Num, Epsilon = Num> + Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        Num::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<Num> AbsDiffEq for Vector3<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon)
            && self.dy.abs_diff_eq(&other.dy, epsilon)
            && self.dz.abs_diff_eq(&other.dz, epsilon)
    }
}

impl<Num: Float> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Float> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2 { x, y }
    }
}

impl<Num: Float> CartesianPoint3d for Point3<Num> {
    type Num = Num;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }

    fn z(&self) -> Self::Num {
        self.z
    }
}

impl<Num: Float> NewCartesianPoint3d<Num> for Point3<Num> {
    fn new(x: Num, y: Num, z: Num) -> Self {
        Point3 { x, y, z }
    }
}
