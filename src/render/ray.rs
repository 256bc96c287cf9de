use crate::{
    traits::{
        Zero,
        Normalizable
    },
    structs::{
        Vector3
    },
    scene::{
        Scene
    }
};

pub struct Ray {
    // Откуда
    pub origin: Vector3,
    // Куда пускаем луч
    pub direction: Vector3,
}

impl Ray {
    /// Первичный луч из камеры через сабсэмпл (dx, dy) пикселя (x, y).
    /// Пиксель делится сеткой grid x grid, grid == 1 дает луч через центр пикселя.
    pub fn create_prime(x: u32, y: u32, dx: u32, dy: u32, grid: u32, scene: &Scene) -> Ray {
        let viewport_width = scene.viewport_width();
        let viewport_height = scene.viewport_height;

        // Координаты сабсэмпла в сетке сабсэмплов всей картинки
        let sample_x = (x * grid + dx) as f32;
        let sample_y = (y * grid + dy) as f32;

        // Перевод в координаты вьюпорта: x - слева направо, y - снизу вверх
        let u = (sample_x + 0.5) * (viewport_width / (scene.width as f32 * grid as f32)) - viewport_width / 2.0;
        let v = viewport_height / 2.0 - (sample_y + 0.5) * (viewport_height / (scene.height as f32 * grid as f32));

        // Картинная плоскость лежит на фокусном расстоянии в сторону -z
        let direction = Vector3::new(u, v, -scene.focal_length).normalize();

        // Камера закреплена в начале координат
        Ray {
            origin: Vector3::zero(),
            direction,
        }
    }
}
