//! CLI tool for inspecting saved path trace files.
//!
//! Displays waypoint count, total length, bounds and spacing statistics.
//!
//! # Usage
//!
//! ```bash
//! path_info output/path.mpth
//! path_info --verbose output/path.mpth
//! ```

use std::env;

use marga_nav::PathRecorder;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Config {
    path_file: String,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut path_file = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if path_file.is_some() {
                    return Err("Multiple path files specified".to_string());
                }
                path_file = Some(arg.to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let path_file = path_file.ok_or("Missing path file argument")?;

    Ok(Config { path_file, verbose })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] <path_file>

Options:
  -v, --verbose   List every waypoint
  -h, --help      Show this help
"#,
        program
    );
}

fn run(config: Config) -> marga_nav::Result<()> {
    // Spacing is irrelevant for inspection; only load is used.
    let mut recorder = PathRecorder::new(0.0);
    recorder.load(&config.path_file)?;
    let trace = recorder.trace();

    println!("Path file: {}", config.path_file);
    println!("Waypoints: {}", trace.len());
    println!("Total length: {:.1} mm", trace.total_length_mm());

    if let Some((min, max)) = trace.bounds() {
        println!(
            "Bounds: ({:.1}, {:.1}) .. ({:.1}, {:.1}) mm",
            min.x, min.y, max.x, max.y
        );
    }

    let spacings: Vec<f32> = trace
        .waypoints()
        .windows(2)
        .map(|w| w[0].distance(&w[1]))
        .collect();
    if !spacings.is_empty() {
        let min_spacing = spacings.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_spacing = spacings.iter().cloned().fold(0.0f32, f32::max);
        println!(
            "Spacing: min {:.1} mm, max {:.1} mm, mean {:.1} mm",
            min_spacing,
            max_spacing,
            spacings.iter().sum::<f32>() / spacings.len() as f32
        );
    }

    if config.verbose {
        for (i, p) in trace.waypoints().iter().enumerate() {
            println!("  [{:4}] ({:.2}, {:.2})", i, p.x, p.y);
        }
    }

    Ok(())
}
