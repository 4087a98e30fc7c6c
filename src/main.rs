use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};

use raycore::{demos, output, Config};

mod cli;
mod logger;

use cli::{Args, Demo};
use logger::init_logger;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Raycore - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };
    apply_overrides(&mut config, args);

    let output_path = config
        .output
        .clone()
        .unwrap_or_else(|| args.demo.default_output());
    info!("Demo {:?} at {}x{}", args.demo, config.width, config.height);

    match args.demo {
        Demo::Sphere => output::save_canvas(&demos::render_sphere(&config)?, &output_path)?,
        Demo::Clock => output::save_canvas(&demos::render_clock(&config), &output_path)?,
        Demo::Projectile => output::save_canvas(&demos::render_projectile(&config), &output_path)?,
        Demo::Pulse => {
            for (frame, canvas) in demos::render_pulse(&config, args.frames)?.iter().enumerate() {
                output::save_canvas(canvas, &frame_path(&output_path, frame))?;
            }
        }
    }
    Ok(())
}

/// Command-line values take precedence over the configuration file.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
}

/// `pulse.png` becomes `pulse_003.png` for frame 3.
fn frame_path(base: &Path, frame: usize) -> PathBuf {
    let stem = base.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let mut name = format!("{}_{:03}", stem, frame);
    if let Some(ext) = base.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    base.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_keep_directory_and_extension() {
        assert_eq!(frame_path(Path::new("out/pulse.png"), 3), PathBuf::from("out/pulse_003.png"));
        assert_eq!(frame_path(Path::new("anim.exr"), 12), PathBuf::from("anim_012.exr"));
        assert_eq!(frame_path(Path::new("frames"), 0), PathBuf::from("frames_000"));
    }

    #[test]
    fn command_line_overrides_config() {
        let args = Args::try_parse_from(["raycore", "--width", "40", "-o", "x.exr"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.width, 40);
        assert_eq!(config.height, 256);
        assert_eq!(config.output, Some(PathBuf::from("x.exr")));
    }
}
