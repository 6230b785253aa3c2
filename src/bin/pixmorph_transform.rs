use log::info;
use pixmorph::config::load_config;
use pixmorph::config::transform::TransformToolConfig;
use pixmorph::image::io::{load_ppm, save_png, save_ppm};
use pixmorph::render::print_grid;
use pixmorph::transform::{apply_operations, blend_images, scale};
use pixmorph::{Error, Result};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: TransformToolConfig = load_config(Path::new(&config_path))?;

    let input = load_ppm(&config.input)?;
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        input.width(),
        input.height()
    );
    let mut result = apply_operations(&input, &config.operations)?;

    if let Some(blend) = &config.blend {
        let partner = load_ppm(&blend.with)?;
        let partner = if blend.rescale && partner.dims() != result.dims() {
            scale(&partner, result.width(), result.height())?
        } else {
            partner
        };
        result = blend_images(&result, &partner, blend.alpha)?;
    }

    if let Some(path) = &config.output.ppm {
        save_ppm(&result, path)?;
        info!("saved {}", path.display());
    }
    if let Some(path) = &config.output.png {
        save_png(&result, path)?;
        info!("saved {}", path.display());
    }
    if config.output.print {
        print_grid(&result).map_err(|e| Error::Config(format!("failed to print grid: {e}")))?;
    }
    Ok(())
}

fn usage() -> Error {
    Error::Config("Usage: pixmorph_transform <config.json>".to_string())
}
