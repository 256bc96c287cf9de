use std::{
    ops::{
        Add,
        Mul,
        Div
    }
};
use image::{
    Rgba
};
use crate::{
    traits::{
        Zero,
    }
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Zero for Color {
    fn zero() -> Self {
        Color{
            red: 0.0_f32,
            green: 0.0_f32,
            blue: 0.0_f32,
        }
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Self) -> Self::Output {
        Color{
            red: self.red + rhs.red,
            green: self.green + rhs.green,
            blue: self.blue + rhs.blue,
        }
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, rhs: f32) -> Self::Output {
        Color{
            red: self.red * rhs,
            green: self.green * rhs,
            blue: self.blue * rhs,
        }
    }
}

impl Div<f32> for Color {
    type Output = Color;
    fn div(self, rhs: f32) -> Self::Output {
        // Тот же no-op при делении на ноль, что и у Vector3
        if rhs == 0.0_f32 {
            return self;
        }
        Color{
            red: self.red / rhs,
            green: self.green / rhs,
            blue: self.blue / rhs,
        }
    }
}

impl Color {
    /// Распаковка цвета из целого числа вида 0xRRGGBB
    pub fn from_packed(packed: u32) -> Color {
        Color{
            red: ((packed >> 16) & 0xFF) as f32 / 255.0,
            green: ((packed >> 8) & 0xFF) as f32 / 255.0,
            blue: (packed & 0xFF) as f32 / 255.0,
        }
    }

    /// Каналы в диапазоне [0, 255], дробная часть отбрасывается, выход за диапазон обрезается
    pub fn to_rgb_triplet(&self) -> (u8, u8, u8) {
        let r = ((self.red * 255.0) as i32).clamp(0, 255) as u8;
        let g = ((self.green * 255.0) as i32).clamp(0, 255) as u8;
        let b = ((self.blue * 255.0) as i32).clamp(0, 255) as u8;
        (r, g, b)
    }

    pub fn to_rgba(&self) -> Rgba<u8>{
        let (r, g, b) = self.to_rgb_triplet();
        Rgba([r, g, b, 255])
    }
}
