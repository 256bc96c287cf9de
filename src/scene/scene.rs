// Использование общих трейтов и классов через crate от корня
use crate::{
    traits::{
        Dotable,
        Normalizable
    },
    structs::{
        Vector3,
        Color
    },
    figures::{
        Intersectable,
        Normalable,
        Sphere
    },
    render::{
        Ray
    }
};
// Использование соседних файликов через super
use super::{
    intersection::{
        Intersection,
    },
    light::{
        Light
    }
};

/// Смещение начала теневого луча вдоль нормали,
/// иначе луч сразу же пересекается с собственной поверхностью
const SHADOW_BIAS: f32 = 0.001;

/// Во сколько раз гасится свет в тени
const SHADOW_ATTENUATION: f32 = 0.1;

#[derive(Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub viewport_height: f32,
    pub focal_length: f32,
    pub light: Light,
    pub background_color: Color,
    spheres: Vec<Sphere>,
}

impl Scene {
    pub fn new(width: u32,
               height: u32,
               viewport_height: f32,
               focal_length: f32,
               light: Light,
               background_color: Color) -> Scene {
        Scene{
            width,
            height,
            viewport_height,
            focal_length,
            light,
            background_color,
            spheres: Vec::new(),
        }
    }

    /// Сферы только добавляются, индексы остаются стабильными до конца рендеринга
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Ширина вьюпорта выводится из высоты и соотношения сторон картинки
    pub fn viewport_width(&self) -> f32 {
        self.viewport_height * (self.width as f32 / self.height as f32)
    }

    pub fn trace_nearest_intersection<'a>(&'a self, ray: &Ray) -> Option<Intersection<'a>> {
        // Обходим все сферы без всяких ускоряющих структур
        self.spheres
            .iter()
            // Фильтруем только найденные пересечения
            .filter_map(|sphere| {
                let found_opt = sphere.intersect(ray);
                // На всякий пожарный фильтруем Nan значения
                match found_opt {
                    Some(distance) if !distance.is_nan() => {
                        Some(Intersection::new(distance, sphere))
                    },
                    _ => {
                        None
                    }
                }
            })
            // Находим среди всех минимум
            .min_by(|i1, i2| {
                // Можно спокойно вызывать unwrap(), так как Nan был отфильтрован выше
                i1.get_distance()
                    .partial_cmp(&i2.get_distance())
                    .unwrap()
            })
    }

    /// Расчет освещенности в найденной точке пересечения
    pub fn calculate_intersection_color(&self, ray: &Ray, intersection: &Intersection<'_>) -> Color {
        let sphere = intersection.get_sphere();

        // Точка пересечения и нормаль в ней
        let hit_point: Vector3 = ray.origin + ray.direction * intersection.get_distance();
        let normal = sphere.normal_at(&hit_point);

        // Направление на источник света
        let light_direction = (self.light.position - hit_point).normalize();

        // Диффузная составляющая с ослаблением по квадрату расстояния
        let diffuse = normal.dot(&light_direction).max(0.0);
        let light_distance2 = self.light.position.distance2_to(&hit_point);
        let mut intensity = self.light.brightness * diffuse / light_distance2;

        // Интенсивность насыщается на единице
        intensity = intensity.min(1.0);

        // Теневой луч из смещенной точки к источнику света,
        // достаточно первого же пересечения с любой сферой
        let shadow_ray = Ray{
            origin: hit_point + normal * SHADOW_BIAS,
            direction: light_direction,
        };
        let occluded = self.spheres
            .iter()
            .any(|sphere| sphere.intersect(&shadow_ray).is_some());
        if occluded {
            intensity *= SHADOW_ATTENUATION;
        }

        sphere.color * intensity
    }

    /// Цвет одного сэмпла: либо освещенность ближайшей сферы, либо цвет фона
    pub fn sample_color(&self, ray: &Ray) -> Color {
        match self.trace_nearest_intersection(ray) {
            Some(intersection) => {
                self.calculate_intersection_color(ray, &intersection)
            },
            None => {
                self.background_color
            }
        }
    }
}
