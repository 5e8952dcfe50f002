//! skypol CLI - sky polarization renderer.
//!
//! Renders luminance, degree of polarization and angle of polarization
//! images of a Rayleigh sky onto cube faces or a whole-sky dome.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use skypol::config::{GridConfig, ProjectionKind};
use skypol::export::{export_feature_images, PngExportOptions};
use skypol::render::{cubebox_all, cubebox_named, cubebox_strict, skydome_with};
use skypol::sky::RayleighSky;

/// Sky polarization renderer.
#[derive(Parser)]
#[command(name = "skypol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every render command.
#[derive(clap::Args)]
struct CommonArgs {
    /// Image width in pixels.
    #[arg(long, default_value = "256")]
    width: usize,

    /// Image height in pixels.
    #[arg(long, default_value = "256")]
    height: usize,

    /// Sun zenith angle in degrees.
    #[arg(long, default_value = "30")]
    sun_zenith_deg: f64,

    /// Sun azimuth in degrees.
    #[arg(long, default_value = "0")]
    sun_azimuth_deg: f64,

    /// Degree of polarization at 90 degrees from the sun.
    #[arg(long, default_value = "0.75")]
    dop_max: f64,

    /// Output directory for generated files.
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Base name for output files.
    #[arg(short, long, default_value = "sky")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one cube face, or all six.
    Cube {
        /// Face name: left, front, right, back, top or bottom.
        #[arg(short, long, default_value = "front")]
        side: String,

        /// Fail on unknown face names instead of rendering a blank face.
        #[arg(long)]
        strict: bool,

        /// Render all six faces (ignores --side).
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Render the whole sky.
    Dome {
        /// Pixel to sphere projection.
        #[arg(short, long, default_value = "equirectangular")]
        projection: ProjectionArg,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProjectionArg {
    Equirectangular,
    Fisheye,
}

impl From<ProjectionArg> for ProjectionKind {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::Equirectangular => ProjectionKind::Equirectangular,
            ProjectionArg::Fisheye => ProjectionKind::Fisheye,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Cube { side, strict, all, common } => run_cube(&side, strict, all, &common),
        Commands::Dome { projection, common } => run_dome(projection.into(), &common),
    }
}

fn setup(common: &CommonArgs) -> (GridConfig, RayleighSky) {
    if common.width == 0 || common.height == 0 || common.width > 8192 || common.height > 8192 {
        eprintln!("Error: width and height must be between 1 and 8192");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&common.dop_max) {
        eprintln!("Error: dop-max must be between 0.0 and 1.0");
        std::process::exit(1);
    }

    println!("skypol - Sky Polarization Renderer");
    println!("==================================");
    println!("Resolution: {}x{}", common.width, common.height);
    println!(
        "Sun: zenith {:.1} deg, azimuth {:.1} deg",
        common.sun_zenith_deg, common.sun_azimuth_deg
    );
    println!("Output: {}", common.output.display());

    let config = GridConfig::new(common.width, common.height);
    let sky = RayleighSky::from_degrees(common.sun_zenith_deg, common.sun_azimuth_deg)
        .with_dop_max(common.dop_max);
    (config, sky)
}

fn write_images(images: &skypol::FeatureImages, common: &CommonArgs, base_name: &str) {
    let options = PngExportOptions::default();
    if let Err(e) = export_feature_images(images, &common.output, base_name, &options) {
        eprintln!("Error exporting {}: {}", base_name, e);
        std::process::exit(1);
    }
    println!("  Saved: {}_{{luminance,dop,aop}}.png", base_name);
}

fn run_cube(side: &str, strict: bool, all: bool, common: &CommonArgs) {
    let (config, sky) = setup(common);
    let start = Instant::now();

    if all {
        println!("\nRendering all cube faces...");
        for (side, images) in cubebox_all(&sky, &config) {
            write_images(&images, common, &format!("{}_{}", common.name, side));
        }
    } else {
        println!("\nRendering cube face '{}'...", side);
        let images = if strict {
            match cubebox_strict(&sky, side, &config) {
                Ok(images) => images,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            cubebox_named(&sky, side, &config)
        };
        write_images(&images, common, &format!("{}_{}", common.name, side));
    }

    println!("\nDone in {:.2?}", start.elapsed());
}

fn run_dome(projection: ProjectionKind, common: &CommonArgs) {
    let (config, sky) = setup(common);
    let config = config.with_projection(projection);
    let start = Instant::now();

    println!("\nRendering skydome ({:?})...", projection);
    let images = skydome_with(&sky, &config);
    write_images(&images, common, &format!("{}_dome", common.name));

    println!("\nDone in {:.2?}", start.elapsed());
}
