use collinear_points::config::load_config;
use collinear_points::diagnostics::DetectionReport;
use collinear_points::io::{load_points, write_json_file};
use collinear_points::CollinearFinder;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let points = load_points(&config.input_path)?;
    let t0 = Instant::now();
    let finder = CollinearFinder::build_with_options(&points, config.finder)
        .map_err(|e| format!("Invalid input {}: {e}", config.input_path.display()))?;
    let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;

    for segment in finder.segments() {
        println!("{segment}");
    }
    println!(
        "{} segments from {} points in {:.3} ms",
        finder.segment_count(),
        points.len(),
        latency_ms
    );

    if let Some(json_out) = &config.output.json_out {
        let report = DetectionReport::from_finder(&finder, latency_ms);
        write_json_file(json_out, &report)?;
        println!("Saved report to {}", json_out.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: collinear_demo <config.json>".to_string()
}
