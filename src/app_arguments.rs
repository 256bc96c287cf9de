use std::path::PathBuf;
use structopt::StructOpt;

use crate::render::RenderMode;

/// App parameters
#[derive(StructOpt, Debug)]
#[structopt(name = "basic")]
pub struct AppArguments {
    /// Scene description file path
    #[structopt(long, parse(from_os_str))]
    pub input_scene: PathBuf,

    /// Output image file path (P3 text format)
    #[structopt(long, parse(from_os_str))]
    pub output_image: PathBuf,

    /// Render mode: diagnostics, basic or supersampled
    #[structopt(long, default_value = "supersampled")]
    pub mode: RenderMode,

    /// Additionally save the rendered image as png
    #[structopt(long, parse(from_os_str))]
    pub png_output: Option<PathBuf>,

    /// Verbose
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}
