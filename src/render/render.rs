use std::{
    io::{
        Write
    },
    path::{
        Path
    },
    str::{
        FromStr
    }
};
use image::{
    GenericImage,
    DynamicImage
};
use rayon::{
    prelude::{
        *
    }
};
use eyre::{
    WrapErr
};
use tracing::{
    debug
};
use crate::{
    traits::{
        Zero
    },
    structs::{
        Color
    },
    scene::{
        Scene
    },
};
use super::{
    Ray
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Режим рендеринга выбирается в рантайме, а не фичами сборки
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Вместо картинки выводится текстовый дамп сцены
    Diagnostics,
    /// Один луч через центр каждого пикселя
    Basic,
    /// Сетка 3x3 лучей на пиксель с усреднением
    Supersampled,
}

impl FromStr for RenderMode {
    type Err = eyre::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "diagnostics" => Ok(RenderMode::Diagnostics),
            "basic" => Ok(RenderMode::Basic),
            "supersampled" => Ok(RenderMode::Supersampled),
            other => Err(eyre::eyre!("Unknown render mode: {}", other)),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Единая точка входа рендеринга.
/// Для режимов с картинкой возвращается еще и буфер пикселей.
pub fn render<W: Write>(scene: &Scene, mode: RenderMode, out: &mut W) -> Result<Option<Vec<Color>>, eyre::Error> {
    debug!(?mode, width = scene.width, height = scene.height, "Render started");

    match mode {
        RenderMode::Diagnostics => {
            write_diagnostics(scene, out).wrap_err("Diagnostics write failed")?;
            Ok(None)
        }
        RenderMode::Basic => {
            let pixels = render_pixels(scene, 1);
            write_ppm(scene, &pixels, out).wrap_err("Image write failed")?;
            Ok(Some(pixels))
        }
        RenderMode::Supersampled => {
            let pixels = render_pixels(scene, 3);
            write_ppm(scene, &pixels, out).wrap_err("Image write failed")?;
            Ok(Some(pixels))
        }
    }
}

/// Расчет всех пикселей в порядке строк сверху вниз.
/// Пиксели независимы друг от друга, поэтому строки считаем параллельно,
/// порядок результата от этого не меняется.
fn render_pixels(scene: &Scene, grid: u32) -> Vec<Color> {
    let rows: Vec<Vec<Color>> = (0..scene.height)
        .into_par_iter()
        .map(|y| {
            (0..scene.width)
                .map(|x| render_pixel(scene, x, y, grid))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}

/// Усреднение цветов всех сабсэмплов одного пикселя
fn render_pixel(scene: &Scene, x: u32, y: u32, grid: u32) -> Color {
    let mut total_color = Color::zero();
    for dy in 0..grid {
        for dx in 0..grid {
            let ray = Ray::create_prime(x, y, dx, dy, grid, scene);
            total_color = total_color + scene.sample_color(&ray);
        }
    }
    total_color / ((grid * grid) as f32)
}

/// Запись картинки в текстовом формате P3
fn write_ppm<W: Write>(scene: &Scene, pixels: &[Color], out: &mut W) -> Result<(), eyre::Error> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", scene.width, scene.height)?;
    writeln!(out, "255")?;

    for row in pixels.chunks(scene.width as usize) {
        for pixel in row {
            let (r, g, b) = pixel.to_rgb_triplet();
            write!(out, "{} {} {} ", r, g, b)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Текстовый дамп сцены для отладки без рендеринга картинки
fn write_diagnostics<W: Write>(scene: &Scene, out: &mut W) -> Result<(), eyre::Error> {
    writeln!(out, "image: {} x {}", scene.width, scene.height)?;
    writeln!(
        out,
        "viewport: {:.3} x {:.3}, focal length {:.3}",
        scene.viewport_width(),
        scene.viewport_height,
        scene.focal_length
    )?;
    writeln!(
        out,
        "light: position ({:.3}, {:.3}, {:.3}), brightness {:.3}",
        scene.light.position.x, scene.light.position.y, scene.light.position.z, scene.light.brightness
    )?;
    writeln!(
        out,
        "background color: ({:.3}, {:.3}, {:.3})",
        scene.background_color.red, scene.background_color.green, scene.background_color.blue
    )?;
    writeln!(out, "spheres: {}", scene.spheres().len())?;
    for (index, sphere) in scene.spheres().iter().enumerate() {
        writeln!(
            out,
            "  {}: center ({:.3}, {:.3}, {:.3}), radius {:.3}, color ({:.3}, {:.3}, {:.3})",
            index,
            sphere.center.x,
            sphere.center.y,
            sphere.center.z,
            sphere.radius,
            sphere.color.red,
            sphere.color.green,
            sphere.color.blue
        )?;
    }

    Ok(())
}

/// Дополнительно сохраняем отрендеренный буфер еще и в PNG
pub fn save_png(scene: &Scene, pixels: &[Color], path: &Path) -> Result<(), eyre::Error> {
    let mut image = DynamicImage::new_rgb8(scene.width, scene.height);
    for (index, pixel) in pixels.iter().enumerate() {
        let x = index as u32 % scene.width;
        let y = index as u32 / scene.width;
        image.put_pixel(x, y, pixel.to_rgba());
    }
    image.save(path).wrap_err("Png save failed")?;
    Ok(())
}

#[cfg(test)]
mod test{
    use super::*;
    use crate::{
        structs::{
            Vector3
        },
        figures::{
            Sphere
        },
        scene::{
            Light
        }
    };

    fn render_to_string(scene: &Scene, mode: RenderMode) -> (String, Option<Vec<Color>>) {
        let mut output: Vec<u8> = Vec::new();
        let pixels = render(scene, mode, &mut output).expect("Render failed");
        (String::from_utf8(output).expect("Utf8 expected"), pixels)
    }

    #[test]
    fn test_empty_scene_renders_pure_background() {
        let light = Light{
            position: Vector3::new(0.0, 5.0, 0.0),
            brightness: 10.0,
        };
        let scene = Scene::new(2, 2, 2.0, 1.0, light, Color::from_packed(0xFFFFFF));

        let (text, _) = render_to_string(&scene, RenderMode::Supersampled);
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 255 255 255 255 255 \n255 255 255 255 255 255 \n"
        );
    }

    #[test]
    fn test_single_red_sphere_fills_pixel() {
        // Свет в камере настолько яркий, что интенсивность насыщается,
        // фон указывает на тот же красный цвет палитры
        let light = Light{
            position: Vector3::zero(),
            brightness: 1000.0,
        };
        let mut scene = Scene::new(1, 1, 2.0, 1.0, light, Color::from_packed(0xFF0000));
        scene.add_sphere(Sphere{
            center: Vector3::new(0.0, 0.0, -3.0),
            radius: 1.0,
            color: Color::from_packed(0xFF0000),
        });

        let (text, _) = render_to_string(&scene, RenderMode::Supersampled);
        assert_eq!(text, "P3\n1 1\n255\n255 0 0 \n");
    }

    #[test]
    fn test_supersampled_pixel_is_mean_of_samples() {
        // Сфера сбоку, чтобы часть сабсэмплов попадала в нее, а часть - в фон
        let light = Light{
            position: Vector3::new(0.0, 5.0, 0.0),
            brightness: 20.0,
        };
        let mut scene = Scene::new(1, 1, 2.0, 1.0, light, Color::from_packed(0x0000FF));
        scene.add_sphere(Sphere{
            center: Vector3::new(2.0, 0.0, -2.0),
            radius: 1.0,
            color: Color{ red: 1.0, green: 1.0, blue: 1.0 },
        });

        // Считаем ожидаемое среднее вручную по всем 9 лучам
        let mut hits = 0;
        let mut misses = 0;
        let mut total_color = Color::zero();
        for dy in 0..3 {
            for dx in 0..3 {
                let ray = Ray::create_prime(0, 0, dx, dy, 3, &scene);
                if scene.trace_nearest_intersection(&ray).is_some() {
                    hits += 1;
                } else {
                    misses += 1;
                }
                total_color = total_color + scene.sample_color(&ray);
            }
        }
        let expected = total_color / 9.0;

        // Пиксель действительно лежит на краю сферы
        assert!(hits > 0);
        assert!(misses > 0);

        let (_, pixels) = render_to_string(&scene, RenderMode::Supersampled);
        let pixel = pixels.expect("Pixels expected")[0];
        assert!((pixel.red - expected.red).abs() < 1e-6);
        assert!((pixel.green - expected.green).abs() < 1e-6);
        assert!((pixel.blue - expected.blue).abs() < 1e-6);
    }

    #[test]
    fn test_basic_mode_uses_single_center_ray() {
        let light = Light{
            position: Vector3::new(0.0, 5.0, 0.0),
            brightness: 20.0,
        };
        let mut scene = Scene::new(1, 1, 2.0, 1.0, light, Color::from_packed(0x0000FF));
        scene.add_sphere(Sphere{
            center: Vector3::new(0.0, 0.0, -3.0),
            radius: 1.0,
            color: Color{ red: 1.0, green: 1.0, blue: 1.0 },
        });

        let center_ray = Ray::create_prime(0, 0, 0, 0, 1, &scene);
        let expected = scene.sample_color(&center_ray);

        let (_, pixels) = render_to_string(&scene, RenderMode::Basic);
        let pixel = pixels.expect("Pixels expected")[0];
        assert!((pixel.red - expected.red).abs() < 1e-6);
        assert!((pixel.green - expected.green).abs() < 1e-6);
        assert!((pixel.blue - expected.blue).abs() < 1e-6);
    }

    #[test]
    fn test_diagnostics_mode_dumps_scene() {
        let light = Light{
            position: Vector3::new(0.0, 5.0, 0.0),
            brightness: 10.0,
        };
        let mut scene = Scene::new(4, 2, 2.0, 1.0, light, Color::from_packed(0xFFFFFF));
        scene.add_sphere(Sphere{
            center: Vector3::new(0.0, 0.0, -3.0),
            radius: 1.0,
            color: Color::from_packed(0xFF0000),
        });

        let (text, pixels) = render_to_string(&scene, RenderMode::Diagnostics);
        assert!(pixels.is_none());
        assert!(text.contains("image: 4 x 2"));
        assert!(text.contains("viewport: 4.000 x 2.000"));
        assert!(text.contains("spheres: 1"));
        // Никакого заголовка картинки в диагностике нет
        assert!(!text.contains("P3"));
    }

    #[test]
    fn test_render_mode_parsing() {
        assert_eq!("basic".parse::<RenderMode>().unwrap(), RenderMode::Basic);
        assert_eq!("supersampled".parse::<RenderMode>().unwrap(), RenderMode::Supersampled);
        assert_eq!("diagnostics".parse::<RenderMode>().unwrap(), RenderMode::Diagnostics);
        assert!("fancy".parse::<RenderMode>().is_err());
    }
}
