use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which scene to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Silhouette of the configured sphere
    Sphere,
    /// Animated sphere, one file per frame
    Pulse,
    /// Twelve hour marks placed with rotations
    Clock,
    /// Trajectory of a launched projectile
    Projectile,
}

impl Demo {
    /// File name used when neither the command line nor the config names one
    pub fn default_output(self) -> PathBuf {
        let name = match self {
            Demo::Sphere => "sphere.png",
            Demo::Pulse => "pulse.png",
            Demo::Clock => "clock.png",
            Demo::Projectile => "projectile.png",
        };
        PathBuf::from(name)
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "raycore")]
#[command(about = "Ray-sphere demos on a tuple/matrix core")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// TOML configuration file; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene to render
    #[arg(long, value_enum, default_value = "sphere")]
    pub demo: Demo,

    /// Image width in pixels (overrides the config)
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels (overrides the config)
    #[arg(long)]
    pub height: Option<usize>,

    /// Output file path (.png for 8-bit, .exr for f32)
    #[arg(short, long, help = "Output file path (.png for 8-bit, .exr for f32)")]
    pub output: Option<PathBuf>,

    /// Number of frames for the pulse demo
    #[arg(long, default_value = "8")]
    pub frames: usize,
}
