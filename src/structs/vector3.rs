use std::{
    ops::{
        Sub,
        Add,
        Mul,
        Div
    }
};
use crate::{
    traits::{
        Length,
        Zero,
        Normalizable,
        Dotable
    }
};

//////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3{
            x: 0.0_f32,
            y: 0.0_f32,
            z: 0.0_f32,
        }
    }
}

impl Length for Vector3{
    fn length2(&self) -> f32 {
        self.dot(self)
    }

    fn length(&self) -> f32 {
        self.length2().sqrt()
    }
}

impl Normalizable for Vector3{
    fn normalize(&self) -> Self{
        let length: f32 = self.length();
        // Нулевой вектор возвращаем как есть, чтобы не делить на ноль
        if length == 0.0_f32 {
            return *self;
        }
        *self / length
    }
}

impl Dotable for Vector3{
    type Operand = Vector3;
    fn dot(&self, other: &Self::Operand) -> f32 {
            self.x * other.x +
            self.y * other.y +
            self.z * other.z
    }
}

impl Sub for Vector3{
    type Output = Vector3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector3{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add for Vector3{
    type Output = Vector3;
    fn add(self, rhs: Self) -> Self::Output {
        Vector3{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<Vector3> for Vector3{
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3{
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector3{
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f32) -> Self::Output {
        // Деление на ноль - молчаливый no-op, вектор возвращается без изменений
        if rhs == 0.0_f32 {
            return self;
        }
        Vector3{
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Vector3{
    pub fn new(x: f32, y: f32, z: f32) -> Vector3{
        Vector3{
            x,
            y,
            z
        }
    }

    /// Квадрат расстояния до другой точки
    pub fn distance2_to(&self, other: &Vector3) -> f32{
        (*self - *other).length2()
    }

    /// Расстояние до другой точки
    pub fn distance_to(&self, other: &Vector3) -> f32{
        (*self - *other).length()
    }
}
