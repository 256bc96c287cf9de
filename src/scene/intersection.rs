use crate::{
    figures::{
        Sphere
    }
};

pub struct Intersection<'a> {
    distance: f32,
    sphere: &'a Sphere
}

impl<'a> Intersection<'a> {
    pub fn new(distance: f32, sphere: &'a Sphere) -> Intersection<'a> {
        Intersection{
            distance,
            sphere
        }
    }

    /// Дистанция от начала луча до точки пересечения
    pub fn get_distance(&self) -> f32{
        self.distance
    }

    /// Найденная сфера
    pub fn get_sphere(&'a self) -> &'a Sphere {
        self.sphere
    }
}
