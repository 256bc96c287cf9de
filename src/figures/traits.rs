use crate::{
    structs::{
        Vector3
    },
    render::{
        Ray
    }
};

pub trait Intersectable {
    /// Расстояние от начала луча до ближайшей точки пересечения
    fn intersect(&self, ray: &Ray) -> Option<f32>;
}

pub trait Normalable {
    fn normal_at(&self, hit_point: &Vector3) -> Vector3;
}
