use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::info;
use vault_lamps::{
    DistributionMode, LampPlan,
    io::yaml::{self, YamlPlanConfig},
    render::{
        animation_renderer::{PaddingSweep, PaddingSweepBuilder},
        canvas::ImageFormat,
        renderer::Renderer,
    },
    scene::camera::Camera,
};

const DEFAULT_WIDTH: usize = 600;
const DEFAULT_FRAMERATE: u32 = 12;
const DEFAULT_DURATION_SEC: f64 = 3.;
const DEFAULT_OUTPUT_STEM: &str = "vault_lamps";

/// Lamp planner for a vaulted ceiling
/// Places lamps along the vault and renders the layout
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Optional yaml plan file. Command line options override its values
    plan_file: Option<PathBuf>,

    /// Number of lamps, at most 12. Defaults to 7
    #[clap(short = 'n', long)]
    lamps: Option<usize>,

    /// How lamps are spread along the vault. Defaults to radial
    #[clap(short, long)]
    mode: Option<DistributionMode>,

    /// Compresses (negative) or expands (positive) the spacing between lamps.
    /// Must lie in [-0.3, 0.04]. Defaults to -0.07
    #[clap(short, long, allow_negative_numbers = true)]
    padding: Option<f64>,

    /// Print the lamp anchor coordinates instead of rendering an image
    #[clap(long)]
    points: bool,

    /// The format of the output image. Defaults to png.
    /// Animations are always written as gif
    #[clap(short = 'f', long)]
    image_format: Option<ImageFormat>,

    /// The output path of the rendered image.
    /// By default it's `./<plan_filename>.<format>` or `./vault_lamps.<format>`
    #[clap(short, long)]
    output_path: Option<PathBuf>,

    /// Width (in pixels) of the output image.
    #[clap(long, help = format!("Width (in pixels) of the output image.
Overrides the one in the plan file. If not specified anywhere, defaults to {}", DEFAULT_WIDTH))]
    width: Option<usize>,

    /// Height (in pixels) of the output image.
    /// Overrides the one in the plan file.
    /// If not specified anywhere, it keeps the aspect of the drawing
    #[clap(long)]
    height: Option<usize>,

    /// Controls how many samples are taken per pixel.
    /// In other words, the quality of the anti-aliasing (supersampling).
    /// Overrides the one in the plan file
    #[clap(short, long)]
    supersampling_level: Option<usize>,

    /// Render a gif sweeping the padding from `--padding` to `--padding-to`
    #[clap(long)]
    animate: bool,

    /// Final padding of the animation. Defaults to 0.04
    #[clap(long, allow_negative_numbers = true)]
    padding_to: Option<f64>,

    /// Frames per second of the animation
    #[clap(long, help = format!("Frames per second of the animation. Defaults to {}", DEFAULT_FRAMERATE))]
    framerate: Option<u32>,

    /// Duration of the animation in seconds
    #[clap(long, help = format!("Duration of the animation in seconds. Defaults to {}", DEFAULT_DURATION_SEC))]
    duration: Option<f64>,

    /// Show a progress bar while rendering
    #[clap(long)]
    progress: bool,
}

fn default_output_path(plan_file: Option<&Path>, extension: &str) -> PathBuf {
    let mut path = plan_file
        .and_then(Path::file_stem)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_STEM));
    path.set_extension(extension);
    path
}

fn read_plan_file(plan_file: Option<&Path>) -> Result<YamlPlanConfig, String> {
    let Some(path) = plan_file else {
        return Ok(YamlPlanConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read plan file: {}", e))?;
    yaml::parse_str(&source).map_err(|e| format!("Failed to parse plan: {}", e))
}

/// What gets written to the output file.
#[derive(Debug)]
enum Output {
    Image(Renderer, ImageFormat),
    Animation(PaddingSweep),
}

impl Output {
    fn extension(&self) -> String {
        match self {
            Output::Image(_, format) => format.to_string(),
            Output::Animation(_) => "gif".to_string(),
        }
    }

    fn write<W: Write>(&self, writer: W) -> std::io::Result<()> {
        match self {
            Output::Image(renderer, format) => renderer.render().save_to_writer(writer, *format),
            Output::Animation(sweep) => sweep.render_gif(writer),
        }
    }
}

fn resolve_plan(args: &Args, config: &YamlPlanConfig) -> Result<LampPlan, String> {
    LampPlan::new(
        args.lamps.or(config.lamps).unwrap_or(LampPlan::DEFAULT_LAMPS),
        args.mode.or(config.mode).unwrap_or_default(),
        args.padding
            .or(config.padding)
            .unwrap_or(LampPlan::DEFAULT_PADDING),
    )
    .map_err(|e| format!("Invalid plan: {}", e))
}

fn resolve_camera(args: &Args, config: &YamlPlanConfig) -> Result<Camera, String> {
    let width = args.width.or(config.width).unwrap_or(DEFAULT_WIDTH);
    let height = args
        .height
        .or(config.height)
        .unwrap_or_else(|| Camera::height_for_width(width));
    Camera::new(width, height).ok_or_else(|| "Image width and height must be positive".to_string())
}

fn resolve_output(args: &Args, config: &YamlPlanConfig, plan: &LampPlan) -> Result<Output, String> {
    let camera = resolve_camera(args, config)?;
    let supersampling_level = args
        .supersampling_level
        .or(config.supersampling_level)
        .unwrap_or(Renderer::DEFAULT_SUPERSAMPLING_LEVEL);

    if !args.animate && config.animation.is_none() {
        let renderer = Renderer::new(plan.scene(), camera, supersampling_level, args.progress);
        return Ok(Output::Image(renderer, args.image_format.unwrap_or_default()));
    }

    if let Some(format) = args.image_format {
        return Err(format!(
            "Image format `{}` does not apply to animations, they are always written as gif",
            format
        ));
    }
    let animation = config.animation.clone().unwrap_or_default();
    let padding_to = args
        .padding_to
        .or(animation.padding_to)
        .unwrap_or(*LampPlan::PADDING_RANGE.end());
    let padding_to =
        LampPlan::check_padding(padding_to).map_err(|e| format!("Invalid animation: {}", e))?;
    let sweep = PaddingSweepBuilder::default()
        .lamp_count(plan.lamp_count())
        .mode(plan.mode())
        .padding_from(plan.padding())
        .padding_to(padding_to)
        .framerate(
            args.framerate
                .or(animation.framerate)
                .unwrap_or(DEFAULT_FRAMERATE),
        )
        .duration_sec(
            args.duration
                .or(animation.duration_sec)
                .unwrap_or(DEFAULT_DURATION_SEC),
        )
        .camera(camera)
        .supersampling_level(supersampling_level)
        .use_progress_bar(args.progress)
        .build()
        .map_err(|e| format!("Invalid animation: {}", e))?;
    Ok(Output::Animation(sweep))
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = read_plan_file(args.plan_file.as_deref())?;

    let plan = resolve_plan(&args, &config)?;
    info!(
        "{} lamps, {} mode, padding {}",
        plan.lamp_count(),
        plan.mode(),
        plan.padding()
    );

    if args.points {
        for point in plan.points() {
            println!("{:.6} {:.6}", point.x(), point.y());
        }
        return Ok(());
    }

    // Every setting is checked before the output file gets truncated.
    let output = resolve_output(&args, &config, &plan)?;
    let output_path = args
        .output_path
        .clone()
        .unwrap_or_else(|| default_output_path(args.plan_file.as_deref(), &output.extension()));
    let file = File::create(&output_path)
        .map_err(|e| format!("Failed to create output file: {}", e))?;
    output
        .write(BufWriter::new(file))
        .map_err(|e| format!("Failed to save image: {}", e))?;

    println!("Image saved to {:?}", output_path);
    Ok(())
}
