use benchtrace::output::plotters_charts::chart_prefix;
use benchtrace::utils::constants::DEFAULT_BENCH_CSV;
use benchtrace::utils::Logger;
use benchtrace::{generate_bench_charts, log_error, log_info, parse_bench_csv};
use benchtrace::{MixedLabel, PlottersConfig};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} [options] [csv_file]   - Render one OPS/threads chart per benchmark mode", program);
    eprintln!("    csv_file defaults to {}; charts are named <mode>.png,", DEFAULT_BENCH_CSV);
    eprintln!("    or <csv name>_<mode>.png when csv_file is given");
    eprintln!("\nOptions:");
    eprintln!("  -o <dir>               - Output directory for PNG files (default: .)");
    eprintln!("  -s <W>x<H>             - Image size in pixels (default: 1200x600)");
    eprintln!("  --annotate             - Write the ops value next to every point");
    eprintln!("  --mixed-label <style>  - Title for the 'mixed' mode: plain, rw, getput (default: plain)");
    eprintln!("  -L <path>              - Also write log messages to this file");
}

/// Parse "1200x600" into (width, height)
fn parse_size(input: &str) -> Result<(u32, u32), String> {
    let (w, h) = input
        .split_once('x')
        .ok_or_else(|| format!("Invalid size '{}'. Expected format: WIDTHxHEIGHT", input))?;
    let width = w
        .parse::<u32>()
        .map_err(|_| format!("Invalid width '{}'", w))?;
    let height = h
        .parse::<u32>()
        .map_err(|_| format!("Invalid height '{}'", h))?;
    if width < 200 || height < 150 {
        return Err(format!("Image size {}x{} is too small", width, height));
    }
    Ok((width, height))
}

fn exit_with_usage(program: &str, message: &str) -> ! {
    eprintln!("Error: {}", message);
    print_usage(program);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("bench-plot");

    let mut csv_file: Option<String> = None;
    let mut out_dir = PathBuf::from(".");
    let mut mixed_label = MixedLabel::default();
    let mut config = PlottersConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--annotate" => {
                config.annotate = true;
                i += 1;
            }
            "-o" | "-s" | "-L" | "--mixed-label" => {
                let Some(value) = args.get(i + 1) else {
                    exit_with_usage(program, &format!("{} option requires a value", args[i]));
                };
                match args[i].as_str() {
                    "-o" => out_dir = PathBuf::from(value),
                    "-s" => match parse_size(value) {
                        Ok((width, height)) => {
                            config.width = width;
                            config.height = height;
                        }
                        Err(e) => exit_with_usage(program, &e),
                    },
                    "-L" => Logger::init(value),
                    _ => match value.parse::<MixedLabel>() {
                        Ok(style) => mixed_label = style,
                        Err(e) => exit_with_usage(program, &e),
                    },
                }
                i += 2;
            }
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            _ => {
                if csv_file.is_some() {
                    exit_with_usage(program, &format!("unexpected argument '{}'", args[i]));
                }
                csv_file = Some(args[i].clone());
                i += 1;
            }
        }
    }

    // 입력 경로가 주어진 경우에만 파일명 접두사를 붙임
    let (input, prefix) = match csv_file {
        Some(path) => {
            let prefix = chart_prefix(Path::new(&path));
            (PathBuf::from(path), prefix)
        }
        None => (PathBuf::from(DEFAULT_BENCH_CSV), None),
    };

    let rows = match parse_bench_csv(&input) {
        Ok(rows) => rows,
        Err(e) => {
            log_error!("Failed to load {}: {}", input.display(), e);
            let _ = Logger::flush();
            process::exit(1);
        }
    };
    log_info!("Loaded {} rows from {}", rows.len(), input.display());

    match generate_bench_charts(&rows, &out_dir, prefix.as_deref(), mixed_label, &config) {
        Ok(paths) => {
            log_info!("{} charts generated.", paths.len());
            let _ = Logger::flush();
        }
        Err(e) => {
            log_error!("{}", e);
            let _ = Logger::flush();
            process::exit(1);
        }
    }
}
