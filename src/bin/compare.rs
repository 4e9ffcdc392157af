//! Headless comparison of every line/triangle algorithm pair
//!
//! Usage: `raster-compare [scene.ron] [iterations] [out_dir]`
//!
//! Renders the scene `iterations` times per pair, then reports the mean frame
//! time and how many pixels differ from the reference pair
//! (integer Bresenham + incremental edge function). With `out_dir`, one PNG
//! per pair is written there.

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use softraster::rasterizer::{Color, LineAlgorithm, RasterSettings, Rasterizer, TriangleAlgorithm};
use softraster::scene::{load_scene, Scene};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const DEFAULT_ITERATIONS: u64 = 100;

const REFERENCE: RasterSettings = RasterSettings {
    line: LineAlgorithm::BresenhamInt,
    triangle: TriangleAlgorithm::EdgeIncremental,
};

struct PairResult {
    settings: RasterSettings,
    mean: Duration,
    differing: usize,
}

fn count_differences(a: &[Color], b: &[Color]) -> usize {
    let tail = a.len().abs_diff(b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count() + tail
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => load_scene(&path)?,
        None => Scene::demo(),
    };
    let iterations = match args.next() {
        Some(n) => n.parse::<u64>()?.max(1),
        None => DEFAULT_ITERATIONS,
    };
    let out_dir = args.next().map(PathBuf::from);
    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir)?;
    }

    info!(
        "Comparing algorithms on '{}' ({}x{}, {} primitives, {} iterations)",
        scene.name,
        scene.width,
        scene.height,
        scene.primitives.len(),
        iterations
    );

    let mut reference = Rasterizer::default();
    Scene { settings: REFERENCE, ..scene.clone() }.render(&mut reference);

    let pairs = LineAlgorithm::ALL.len() * TriangleAlgorithm::ALL.len();
    let bar = ProgressBar::new(pairs as u64 * iterations);
    bar.set_style(ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")?);

    let mut results = Vec::with_capacity(pairs);
    for line in LineAlgorithm::ALL {
        for triangle in TriangleAlgorithm::ALL {
            let settings = RasterSettings::new(line, triangle);
            let pass = Scene { settings, ..scene.clone() };
            let mut raster = Rasterizer::default();
            bar.set_message(format!("{} / {}", line.label(), triangle.label()));

            let start = Instant::now();
            for _ in 0..iterations {
                pass.render(&mut raster);
                bar.inc(1);
            }
            let mean = start.elapsed().div_f64(iterations as f64);

            if let Some(dir) = &out_dir {
                let path = dir.join(format!("{:?}_{:?}.png", line, triangle));
                raster.framebuffer().save_png(&path)?;
            }

            results.push(PairResult {
                settings,
                mean,
                differing: count_differences(raster.buffer(), reference.buffer()),
            });
        }
    }
    bar.finish_and_clear();

    println!("{:<20} {:<30} {:>12} {:>10}", "line", "triangle", "ms/frame", "diff px");
    for r in &results {
        println!(
            "{:<20} {:<30} {:>12.4} {:>10}",
            r.settings.line.label(),
            r.settings.triangle.label(),
            r.mean.as_secs_f64() * 1000.0,
            r.differing
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
