use crate::{
    traits::{
        Dotable,
        Normalizable
    },
    structs::{
        Vector3,
        Color
    },
    render::{
        Ray
    }
};
use super::{
    traits::{
        Intersectable,
        Normalable
    }
};

#[derive(Debug)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
    pub color: Color,
}

// Реализация проверки пересечения с лучем
impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Подставляем параметризацию луча в уравнение сферы
        // и получаем квадратное уравнение по t
        let sphere_to_ray: Vector3 = ray.origin - self.center;

        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t1 = (-b - discriminant.sqrt()) / (2.0 * a);
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);

        // Берем ближайший строго положительный корень,
        // корни за началом луча пересечением не считаются
        if t1 > 0.0 && t2 > 0.0 {
            Some(t1.min(t2))
        } else if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            Some(t2)
        } else {
            None
        }
    }
}

impl Normalable for Sphere {
    fn normal_at(&self, hit_point: &Vector3) -> Vector3{
        (*hit_point - self.center).normalize()
    }
}
