use std::{
    str::{
        SplitWhitespace
    }
};
use eyre::{
    WrapErr
};
use crate::{
    structs::{
        Vector3,
        Color
    },
    figures::{
        Sphere
    }
};
use super::{
    light::{
        Light
    },
    scene::{
        Scene
    }
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Читалка значений из потока токенов, разделенных пробельными символами
struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    fn new(text: &'a str) -> TokenReader<'a> {
        TokenReader{
            tokens: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str, eyre::Error> {
        self.tokens
            .next()
            .ok_or_else(|| eyre::eyre!("Failed to read {}: unexpected end of scene data", what))
    }

    fn next_f32(&mut self, what: &str) -> Result<f32, eyre::Error> {
        self.next_token(what)?
            .parse::<f32>()
            .wrap_err_with(|| format!("Failed to read {}", what))
    }

    fn next_usize(&mut self, what: &str) -> Result<usize, eyre::Error> {
        self.next_token(what)?
            .parse::<usize>()
            .wrap_err_with(|| format!("Failed to read {}", what))
    }

    /// Шестнадцатиричное число с необязательным префиксом 0x
    fn next_hex_u32(&mut self, what: &str) -> Result<u32, eyre::Error> {
        let token = self.next_token(what)?;
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        u32::from_str_radix(digits, 16)
            .wrap_err_with(|| format!("Failed to read {}", what))
    }

    fn next_vector3(&mut self, what: &str) -> Result<Vector3, eyre::Error> {
        let x = self.next_f32(&format!("{} x", what))?;
        let y = self.next_f32(&format!("{} y", what))?;
        let z = self.next_f32(&format!("{} z", what))?;
        Ok(Vector3::new(x, y, z))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Описание одной сферы из файла сцены, цвет еще в виде индекса палитры
#[derive(Debug)]
pub struct SphereDescription {
    pub position: Vector3,
    pub radius: f32,
    pub color_index: usize,
}

/// Разобранный файл сцены как есть, без раскодирования палитры
#[derive(Debug)]
pub struct SceneDescription {
    pub image_width: f32,
    pub image_height: f32,
    pub viewport_height: f32,
    pub focal_length: f32,
    pub light_position: Vector3,
    pub light_brightness: f32,
    pub colors: Vec<u32>,
    pub background_color_index: usize,
    pub spheres: Vec<SphereDescription>,
}

pub fn parse_scene_description(text: &str) -> Result<SceneDescription, eyre::Error> {
    let mut reader = TokenReader::new(text);

    let image_width = reader.next_f32("image width")?;
    let image_height = reader.next_f32("image height")?;
    let viewport_height = reader.next_f32("viewport height")?;
    let focal_length = reader.next_f32("focal length")?;

    let light_position = reader.next_vector3("light position")?;
    let light_brightness = reader.next_f32("light brightness")?;

    // Палитра из упакованных 0xRRGGBB значений
    let colors_count = reader.next_usize("number of colors")?;
    let mut colors = Vec::with_capacity(colors_count);
    for index in 0..colors_count {
        colors.push(reader.next_hex_u32(&format!("color {}", index))?);
    }
    // Палитра сортируется по упакованному значению,
    // все индексы ниже относятся уже к отсортированной палитре
    colors.sort();

    let background_color_index = reader.next_usize("background color index")?;

    let spheres_count = reader.next_usize("number of spheres")?;
    let mut spheres = Vec::with_capacity(spheres_count);
    for index in 0..spheres_count {
        let position = reader.next_vector3(&format!("sphere {} position", index))?;
        let radius = reader.next_f32(&format!("sphere {} radius", index))?;
        let color_index = reader.next_usize(&format!("sphere {} color index", index))?;
        spheres.push(SphereDescription{
            position,
            radius,
            color_index,
        });
    }

    Ok(SceneDescription{
        image_width,
        image_height,
        viewport_height,
        focal_length,
        light_position,
        light_brightness,
        colors,
        background_color_index,
        spheres,
    })
}

impl SceneDescription {
    /// Вторая фаза: из неизменяемого описания собираем готовую сцену
    pub fn build_scene(&self) -> Result<Scene, eyre::Error> {
        let background_color = self
            .decode_color(self.background_color_index)
            .wrap_err("Background color")?;

        let light = Light{
            position: self.light_position,
            brightness: self.light_brightness,
        };

        // Размеры картинки в файле записаны числами с плавающей точкой,
        // для растеризации дробная часть отбрасывается
        let mut scene = Scene::new(
            self.image_width as u32,
            self.image_height as u32,
            self.viewport_height,
            self.focal_length,
            light,
            background_color,
        );

        for (index, description) in self.spheres.iter().enumerate() {
            let color = self
                .decode_color(description.color_index)
                .wrap_err_with(|| format!("Sphere {} color", index))?;
            scene.add_sphere(Sphere{
                center: description.position,
                radius: description.radius,
                color,
            });
        }

        Ok(scene)
    }

    fn decode_color(&self, index: usize) -> Result<Color, eyre::Error> {
        let packed = self
            .colors
            .get(index)
            .ok_or_else(|| {
                eyre::eyre!("Color index {} is out of palette range (palette size is {})", index, self.colors.len())
            })?;
        Ok(Color::from_packed(*packed))
    }
}

#[cfg(test)]
mod test{
    use super::*;

    const VALID_SCENE: &str = "4 3\n\
                               2.0\n\
                               1.0\n\
                               0.0 5.0 0.0 100.0\n\
                               2\n\
                               0xFF0000 0x00FF00\n\
                               0\n\
                               1\n\
                               0.0 0.0 -5.0 1.0 1\n";

    #[test]
    fn test_parse_valid_scene() {
        let description = parse_scene_description(VALID_SCENE).expect("Parse failed");
        assert_eq!(description.image_width, 4.0);
        assert_eq!(description.image_height, 3.0);
        assert_eq!(description.viewport_height, 2.0);
        assert_eq!(description.focal_length, 1.0);
        assert_eq!(description.light_position, Vector3::new(0.0, 5.0, 0.0));
        assert_eq!(description.light_brightness, 100.0);
        assert_eq!(description.background_color_index, 0);
        assert_eq!(description.spheres.len(), 1);
        assert_eq!(description.spheres[0].radius, 1.0);
        assert_eq!(description.spheres[0].color_index, 1);
    }

    #[test]
    fn test_palette_is_sorted_by_packed_value() {
        let description = parse_scene_description(VALID_SCENE).expect("Parse failed");
        // 0x00FF00 < 0xFF0000, поэтому после сортировки зеленый идет первым
        assert_eq!(description.colors, vec![0x00FF00, 0xFF0000]);

        let scene = description.build_scene().expect("Build failed");
        // Индекс фона 0 указывает на зеленый уже в отсортированной палитре
        assert!((scene.background_color.green - 1.0).abs() < 1e-6);
        assert!(scene.background_color.red.abs() < 1e-6);
        // А сфера с индексом 1 становится красной
        assert!((scene.spheres()[0].color.red - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hex_colors_without_prefix() {
        let input = VALID_SCENE.replace("0xFF0000 0x00FF00", "FF0000 00FF00");
        let description = parse_scene_description(&input).expect("Parse failed");
        assert_eq!(description.colors, vec![0x00FF00, 0xFF0000]);
    }

    #[test]
    fn test_truncated_input_names_missing_field() {
        let input = "4 3\n2.0\n";
        let error = parse_scene_description(input).expect_err("Error expected");
        assert!(format!("{:?}", error).contains("focal length"));
    }

    #[test]
    fn test_malformed_field_names_field() {
        let input = VALID_SCENE.replace("2.0", "oops");
        let error = parse_scene_description(input.as_str()).expect_err("Error expected");
        assert!(format!("{:?}", error).contains("viewport height"));
    }

    #[test]
    fn test_out_of_range_sphere_color_index_fails() {
        let input = VALID_SCENE.replace("0.0 0.0 -5.0 1.0 1", "0.0 0.0 -5.0 1.0 7");
        let description = parse_scene_description(&input).expect("Parse failed");
        let error = description.build_scene().expect_err("Error expected");
        assert!(format!("{:?}", error).contains("out of palette range"));
    }

    #[test]
    fn test_out_of_range_background_index_fails() {
        let input = VALID_SCENE.replace("\n0\n1\n", "\n9\n1\n");
        let description = parse_scene_description(&input).expect("Parse failed");
        let error = description.build_scene().expect_err("Error expected");
        assert!(format!("{:?}", error).contains("out of palette range"));
    }
}
