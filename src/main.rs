//! trirast: render triangle scenes to PNG with the software rasterizer

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use trirast::logging::{init_logging, LoggingConfig};
use trirast::{
    create_test_quad, draw_triangles_with_progress, load_scene, Color, Framebuffer,
    RasterSettings, RasterStats, Scene, ShadingMode, Texture, Triangle, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "trirast", version)]
struct Cli {
    /// Log filter (env_logger syntax), overrides RUST_LOG and -v
    #[arg(long, global = true)]
    log: Option<String>,

    /// More rasterizer output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a RON scene file to a PNG.
    Render(RenderArgs),
    /// Render the built-in test quad to a PNG.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene (RON).
    #[arg(long)]
    scene: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the scene's shading mode.
    #[arg(long, value_enum)]
    shading: Option<ShadingChoice>,

    /// Override the scene's texture.
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Override the output width.
    #[arg(long)]
    width: Option<usize>,

    /// Override the output height.
    #[arg(long)]
    height: Option<usize>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Side of the square output, in pixels.
    #[arg(long, default_value_t = 256)]
    size: usize,

    #[arg(long, value_enum, default_value_t = ShadingChoice::Uv)]
    shading: ShadingChoice,

    /// Texture for `--shading texture` (checkerboard when omitted).
    #[arg(long)]
    texture: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShadingChoice {
    Uv,
    Color,
    Texture,
}

impl From<ShadingChoice> for ShadingMode {
    fn from(choice: ShadingChoice) -> Self {
        match choice {
            ShadingChoice::Uv => ShadingMode::UvDebug,
            ShadingChoice::Color => ShadingMode::VertexColor,
            ShadingChoice::Texture => ShadingMode::Textured,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        filter: cli.log.clone(),
        verbosity: cli.verbose,
        ..Default::default()
    });

    info!("=== trirast v{} ===", VERSION);

    match cli.cmd {
        Command::Render(args) => render(args),
        Command::Demo(args) => demo(args),
    }
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let mut scene = load_scene(&args.scene)
        .with_context(|| format!("load scene {}", args.scene.display()))?;
    info!("Loaded scene: {} triangles", scene.triangles.len());

    if let Some(shading) = args.shading {
        scene.settings.shading = shading.into();
    }
    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }

    let texture = match args.texture {
        Some(path) => Some(
            Texture::from_file(&path).with_context(|| format!("load texture {}", path.display()))?,
        ),
        None => {
            let base = args.scene.parent().unwrap_or_else(|| Path::new("."));
            scene.load_texture(base).context("load scene texture")?
        }
    };

    let fb = rasterize_scene(&scene, texture.as_ref());
    write_png(&fb, &args.out)
}

fn demo(args: DemoArgs) -> anyhow::Result<()> {
    let shading: ShadingMode = args.shading.into();
    let texture = match (&args.texture, shading) {
        (Some(path), _) => Some(
            Texture::from_file(path).with_context(|| format!("load texture {}", path.display()))?,
        ),
        (None, ShadingMode::Textured) => Some(Texture::checkerboard(32, 32, Color::BLACK, Color::WHITE)),
        (None, _) => None,
    };

    let scene = Scene {
        width: args.size,
        height: args.size,
        settings: RasterSettings {
            shading,
            ..Default::default()
        },
        texture: None,
        triangles: create_test_quad(args.size as f32),
    };

    let fb = rasterize_scene(&scene, texture.as_ref());
    write_png(&fb, &args.out)
}

fn rasterize_scene(scene: &Scene, texture: Option<&Texture>) -> Framebuffer {
    let mut fb = Framebuffer::new(scene.width, scene.height);
    fb.clear(Color::from_unit(scene.settings.clear_color));

    let stats = draw_with_progress(&scene.triangles, &scene.settings, texture, &mut fb);
    info!(
        "Rasterized {} triangles ({} fragments, {} covered)",
        stats.triangles, stats.fragments, stats.covered
    );
    fb
}

fn draw_with_progress(
    triangles: &[Triangle],
    settings: &RasterSettings,
    texture: Option<&Texture>,
    fb: &mut Framebuffer,
) -> RasterStats {
    let pb = ProgressBar::new(triangles.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} triangles") {
        pb.set_style(style);
    }

    let stats = draw_triangles_with_progress(triangles, settings, texture, fb, |_, _| pb.inc(1));
    pb.finish_and_clear();
    stats
}

fn write_png(fb: &Framebuffer, out: &Path) -> anyhow::Result<()> {
    fb.save_png(out)
        .with_context(|| format!("write {}", out.display()))?;
    info!("Wrote {} ({}x{})", out.display(), fb.width, fb.height);
    Ok(())
}
