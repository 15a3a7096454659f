//! Renders one or more Wavefront OBJ models into a single TGA file.
//!
//! This is the thin end-to-end driver tying `wavefront`, `raster-core` and
//! `tga-codec` together: load each model, render it into a shared surface,
//! then encode the surface to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use raster_core::{Color, Origin, PixelFormat, Surface};
use tga_codec::FileType;
use wavefront::WavefrontVersion;

#[derive(Parser, Debug)]
#[command(about = "Render Wavefront OBJ models into a TGA file", version)]
struct Args {
    /// OBJ files to render, in order, into the same surface.
    #[arg(required = true)]
    obj_files: Vec<PathBuf>,

    /// Where to write the resulting TGA file.
    #[arg(short, long, default_value = "output.tga")]
    output: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 800)]
    height: usize,

    /// Draw triangle outlines instead of filling them.
    #[arg(long)]
    wireframe: bool,

    /// Write an Original Format (1.0) file instead of New Format (2.0).
    #[arg(long)]
    v1: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut surface = Surface::new_owned(PixelFormat::Bgra8888, Origin::BottomLeft, args.width, args.height)?;

    let palette = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW, Color::CYAN, Color::MAGENTA];

    for (i, path) in args.obj_files.iter().enumerate() {
        let obj = wavefront::load_file(path, WavefrontVersion::V3_0)?;
        log::info!("{}: {} vertices, {} faces", path.display(), obj.vertices.len(), obj.faces.len());

        let model = wavefront::create_model_from_wavefront_obj(&obj);
        let color = palette[i % palette.len()];
        wavefront::render_model(&mut surface, &model, color, args.wireframe);
    }

    let file_type = if args.v1 { FileType::Original } else { FileType::New };
    tga_codec::write_file(&surface, file_type, &args.output)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
