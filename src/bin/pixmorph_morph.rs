use log::info;
use pixmorph::config::load_config;
use pixmorph::config::morph::MorphToolConfig;
use pixmorph::image::io::{load_ppm, write_json_file};
use pixmorph::render::PngSequenceRenderer;
use pixmorph::transform::apply_operations;
use pixmorph::{Error, Morph, Result};
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
    let config: MorphToolConfig = load_config(Path::new(&config_path))?;

    let source = apply_operations(&load_ppm(&config.source)?, &config.source_operations)?;
    let target = apply_operations(&load_ppm(&config.target)?, &config.target_operations)?;

    let morph = Morph::new(&source, &target, config.morph)?;
    let mut renderer =
        PngSequenceRenderer::new(&config.output.frames_dir).with_realtime(config.output.realtime);
    let report = morph.run(&mut renderer)?;

    info!(
        "wrote {} frame(s) to {} in {:.1} ms",
        report.frames.len(),
        config.output.frames_dir.display(),
        report.total_ms
    );
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        info!("saved report to {}", path.display());
    }
    Ok(())
}

fn usage() -> Error {
    Error::Config("Usage: pixmorph_morph <config.json>".to_string())
}
