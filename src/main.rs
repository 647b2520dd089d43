use std::{
    fmt::Display,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use log::{LevelFilter, info, warn};
use phong_tracer::{
    demos,
    render::canvas::{Canvas, ImageFormat},
    scene::yaml::{self, CameraConfig},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Demo {
    Projectile,
    Clock,
    Silhouette,
    BlueBall,
}

impl Display for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Demo::Projectile => write!(f, "projectile"),
            Demo::Clock => write!(f, "clock"),
            Demo::Silhouette => write!(f, "silhouette"),
            Demo::BlueBall => write!(f, "blue-ball"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Phong raytracer for spheres.
/// Renders scenes from yaml files or one of the built-in demos.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene file to render. When omitted, `--demo` is rendered instead
    scene_file: Option<PathBuf>,

    /// The demo to render when no scene file is given
    #[clap(long, default_value = "blue-ball")]
    demo: Demo,

    /// The format of the output image
    #[clap(short = 'f', long, default_value = "png")]
    image_format: ImageFormat,

    /// The output path of the rendered image.
    /// By default it's `./<scene or demo name>.<image_format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    #[clap(long, help = format!("Width (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", CameraConfig::DEFAULT_SIZE))]
    width: Option<usize>,

    #[clap(long, help = format!("Height (in pixels) of the output image.
Overrides the one in the scene file. If not specified anywhere, defaults to {}", CameraConfig::DEFAULT_SIZE))]
    height: Option<usize>,

    /// Show a progress bar while rendering
    #[clap(long)]
    progress: bool,

    /// Log verbosity, applied on top of `RUST_LOG`
    #[clap(long, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    fn progressbar(&self) -> ProgressBar {
        if self.progress {
            ProgressBar::new(0)
        } else {
            ProgressBar::hidden()
        }
    }

    fn camera(&self, mut config: CameraConfig) -> Result<CameraConfig, String> {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        CameraConfig::check_size(config.width, config.height)
            .map_err(|e| format!("Invalid image size: {e}"))?;
        Ok(config)
    }
}

fn render_scene(args: &Args, scene_file: &Path) -> Result<Canvas, String> {
    let scene = yaml::parse_file(scene_file).map_err(|e| format!("Failed to parse scene: {e}"))?;
    let camera = args.camera(scene.camera)?.build();
    let shader = scene.shader.build(&scene.world);

    Ok(camera.render_with_progress(&scene.world, shader.as_ref(), args.progressbar()))
}

impl Demo {
    /// Demos that draw on a canvas of their own size instead of using a camera.
    fn has_fixed_size(&self) -> bool {
        matches!(self, Demo::Projectile | Demo::Clock)
    }
}

fn render_demo(args: &Args) -> Result<Canvas, String> {
    let camera = args.camera(CameraConfig::default())?;
    if args.demo.has_fixed_size() && (args.width.is_some() || args.height.is_some()) {
        warn!(
            "the {} demo has a fixed size, ignoring --width and --height",
            args.demo
        );
    }

    Ok(match args.demo {
        Demo::Projectile => demos::projectile::run(),
        Demo::Clock => demos::clock::run(),
        Demo::Silhouette => demos::silhouette::run(camera.width, camera.height),
        Demo::BlueBall => demos::blue_ball::run(camera.width, camera.height),
    })
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let (canvas, name) = match &args.scene_file {
        Some(scene_file) => {
            let name = scene_file
                .file_stem()
                .ok_or_else(|| format!("Invalid scene file path: {}", scene_file.display()))?
                .to_string_lossy()
                .into_owned();
            (render_scene(&args, scene_file)?, name)
        }
        None => (render_demo(&args)?, args.demo.to_string()),
    };

    let output_path = args.output_path.clone().unwrap_or_else(|| {
        let mut path = PathBuf::from(name);
        path.set_extension(args.image_format.to_string());
        path
    });
    let file = File::create(&output_path)
        .map_err(|e| format!("Failed to create {}: {e}", output_path.display()))?;
    canvas
        .save_to_writer(BufWriter::new(file), args.image_format)
        .map_err(|e| format!("Failed to save image: {e}"))?;

    info!("image saved to {}", output_path.display());
    Ok(())
}
