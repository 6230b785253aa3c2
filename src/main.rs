use pixmorph::image::io::load_ppm;
use pixmorph::image::ppm::decode;
use pixmorph::render::print_grid;
use pixmorph::transform::{flip_horizontally, grayscale};
use std::env;
use std::path::Path;

const SAMPLE: &str = "P3\n2 2\n255\n255 0 0  0 255 0  0 0 255  255 255 255\n";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> pixmorph::Result<()> {
    let grid = match env::args().nth(1) {
        Some(path) => load_ppm(Path::new(&path))?,
        None => decode(SAMPLE)?,
    };
    let stdout_err = |e| pixmorph::Error::Config(format!("failed to write to stdout: {e}"));

    println!("input {}x{}", grid.width(), grid.height());
    print_grid(&grid).map_err(stdout_err)?;
    println!("flipped horizontally");
    print_grid(&flip_horizontally(&grid)).map_err(stdout_err)?;
    println!("grayscale");
    print_grid(&grayscale(&grid)).map_err(stdout_err)?;
    Ok(())
}
