mod app_arguments;
mod traits;
mod structs;
mod figures;
mod scene;
mod render;

use std::{
    fs::{
        read_to_string,
        File
    },
    io::{
        BufWriter,
        Write
    }
};
use eyre::WrapErr;
use structopt::StructOpt;
use tracing::{
    debug,
    Level
};
use crate::{
    app_arguments::AppArguments,
    render::{
        render,
        save_png
    },
    scene::{
        parse_scene_description,
        SceneDescription
    }
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Настойка уровня логирования
fn setup_logging(arguments: &AppArguments) -> Result<(), eyre::Error> {
    use tracing_subscriber::prelude::*;

    // Настройка логирования на основании количества флагов verbose
    let level = match arguments.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        4 => Level::TRACE,
        _ => {
            panic!("Verbose level must be in [0, 4] range");
        }
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .with(tracing_subscriber::filter::EnvFilter::new(env!("CARGO_PKG_NAME"))) // Логи только от текущего приложения, без библиотек
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_error::ErrorLayer::default()) // Для поддержки захватывания SpanTrace в eyre
        .try_init()
        .wrap_err("Tracing init failed")
}

/// Выполняем валидацию переданных аргументов приложения
fn validate_arguments(arguments: &AppArguments) -> Result<(), eyre::Error> {
    // Валидация параметров приложения
    eyre::ensure!(
        arguments.input_scene.exists(),
        "Input scene file does not exist at path: {:?}",
        arguments.input_scene
    );
    eyre::ensure!(
        arguments.input_scene.is_file(),
        "Input scene must be a file: {:?}",
        arguments.input_scene
    );

    Ok(())
}

fn execute_app() -> Result<(), eyre::Error> {
    // Человекочитаемый вывод паники
    color_backtrace::install();

    // Настройка color eyre для ошибок
    color_eyre::install().wrap_err("Error setup failed")?;

    // Аргументы коммандной строки
    let arguments = AppArguments::from_args_safe().wrap_err("Arguments parsing")?;

    // Настройка логирования на основании количества флагов verbose
    setup_logging(&arguments).wrap_err("Logging setup")?;

    // Display arguments
    debug!(?arguments, "App arguments");

    // Валидация параметров приложения
    validate_arguments(&arguments).wrap_err("Arguments validate")?;

    // Описание сцены: сначала разбор файла в неизменяемую структуру
    let scene_text = read_to_string(&arguments.input_scene)
        .wrap_err_with(|| format!("Scene file read failed: {:?}", arguments.input_scene))?;
    let description: SceneDescription = parse_scene_description(&scene_text).wrap_err("Scene parsing")?;
    debug!(?description, "Scene description");

    // Затем сборка сцены, дальше она только читается
    let scene = description.build_scene().wrap_err("Scene building")?;

    // Файлик результата
    let mut writer = {
        let file = File::create(&arguments.output_image)
            .wrap_err_with(|| format!("Output file open failed: {:?}", arguments.output_image))?;
        BufWriter::new(file)
    };

    // Непосредственно рендеринг в выбранном режиме
    let pixels = render(&scene, arguments.mode, &mut writer).wrap_err("Rendering")?;
    writer.flush().wrap_err("Output flush failed")?;

    // Опционально сохраняем еще и png
    if let (Some(pixels), Some(png_path)) = (pixels.as_ref(), arguments.png_output.as_ref()) {
        save_png(&scene, pixels, png_path).wrap_err("Png output")?;
    }

    Ok(())
}

fn main() {
    // Запуск приложения
    if let Err(err) = execute_app() {
        // При ошибке не паникуем, а спокойно выводим сообщение и завершаем приложение с кодом ошибки
        eprint!("Error! Failed with: {:?}", err);
        std::process::exit(1);
    }
}
