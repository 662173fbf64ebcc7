use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mandelbrot_plot::{
    DEFAULT_CENTER, DEFAULT_DIVERGENCE_THRESHOLD, DEFAULT_DOMAIN_WIDTH, DEFAULT_MAX_ITERATIONS,
    ExecutionStrategy, ExplorerController, FilePresenterPort, PixelRect, PngFilePresenter, Point,
    PpmFilePresenter, RenderConfig, Viewport, png_data_uri,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    fn default_path(self) -> PathBuf {
        match self {
            Self::Png => PathBuf::from("mandelbrot.png"),
            Self::Ppm => PathBuf::from("mandelbrot.ppm"),
        }
    }
}

/// Renders the Mandelbrot set with escape-time colouring.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_plot", version)]
struct Args {
    /// Real part of the view centre
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    center_x: f64,

    /// Imaginary part of the view centre
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    center_y: f64,

    /// Width of the viewed region on the real axis
    #[arg(long, default_value_t = DEFAULT_DOMAIN_WIDTH)]
    domain_width: f64,

    #[arg(long, default_value_t = 720)]
    width: u32,

    #[arg(long, default_value_t = 540)]
    height: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Squared-magnitude escape threshold
    #[arg(long, default_value_t = DEFAULT_DIVERGENCE_THRESHOLD)]
    threshold: f64,

    /// Render on the calling thread only
    #[arg(long)]
    serial: bool,

    /// Pixel selection `X0,Y0,X1,Y1` to zoom into; repeat to zoom further
    #[arg(long, value_parser = parse_selection)]
    zoom: Vec<PixelRect>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a PNG data URI to stdout instead of writing a file
    #[arg(long)]
    data_uri: bool,
}

fn parse_selection(s: &str) -> Result<PixelRect, String> {
    let coords = s
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid selection `{}`: {}", s, err))?;

    match coords.as_slice() {
        [x0, y0, x1, y1] => Ok(PixelRect::from_corners(
            Point { x: *x0, y: *y0 },
            Point { x: *x1, y: *y1 },
        )),
        _ => Err(format!("selection `{}` must be X0,Y0,X1,Y1", s)),
    }
}

impl Args {
    fn config(&self) -> Result<RenderConfig, Box<dyn Error>> {
        let strategy = if self.serial {
            ExecutionStrategy::Serial
        } else {
            ExecutionStrategy::Parallel
        };

        Ok(RenderConfig::new(self.max_iterations, self.threshold)?.with_strategy(strategy))
    }
}

fn run<P: FilePresenterPort>(presenter: P, args: &Args) -> Result<(), Box<dyn Error>> {
    let home = Viewport::new(
        args.center_x,
        args.center_y,
        args.domain_width,
        args.width,
        args.height,
    )?;
    let mut controller = ExplorerController::new(presenter, home, args.config()?);

    if args.zoom.is_empty() {
        controller.render_current()?;
    }
    for selection in &args.zoom {
        controller.zoom(*selection)?;
    }

    let viewport = controller.viewport();
    info!(
        center_x = viewport.center().real,
        center_y = viewport.center().imag,
        domain_width = viewport.domain_width(),
        pages = controller.history().page_count(),
        "final view"
    );

    if args.data_uri {
        if let Some(raster) = controller.raster() {
            println!("{}", png_data_uri(raster)?);
        }
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| args.format.default_path());
    controller.present(path)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.format {
        OutputFormat::Png => run(PngFilePresenter::new(), &args),
        OutputFormat::Ppm => run(PpmFilePresenter::new(), &args),
    }
}
