use benchtrace::utils::Logger;
use benchtrace::{analyze_alloc_log, log, log_error};
use std::env;
use std::path::PathBuf;
use std::process;

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} [options] <log_file>   - Extract alloc/free records from an allocation trace log", program);
    eprintln!("\nWrites alloc.txt (sorted by alloc size) and free.txt (sorted by free size),");
    eprintln!("then prints 'total_alloc <N> total_free <M>'.");
    eprintln!("\nOptions:");
    eprintln!("  -o <dir>     - Output directory for alloc.txt and free.txt (default: .)");
    eprintln!("  -L <path>    - Also write log messages to this file");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("mem-analyze");

    let mut log_file: Option<String> = None;
    let mut out_dir = PathBuf::from(".");
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-o" | "-L" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} option requires a value", args[i]);
                    print_usage(program);
                    process::exit(1);
                };
                if args[i] == "-o" {
                    out_dir = PathBuf::from(value);
                } else {
                    Logger::init(value);
                }
                i += 2;
            }
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            _ => {
                if log_file.is_some() {
                    eprintln!("Error: unexpected argument '{}'", args[i]);
                    print_usage(program);
                    process::exit(1);
                }
                log_file = Some(args[i].clone());
                i += 1;
            }
        }
    }

    let Some(log_file) = log_file else {
        eprintln!("Error: No log file provided");
        print_usage(program);
        process::exit(1);
    };

    match analyze_alloc_log(&log_file, &out_dir) {
        Ok(totals) => {
            log!("{}", totals);
            let _ = Logger::flush();
        }
        Err(e) => {
            log_error!("Failed to analyze {}: {}", log_file, e);
            let _ = Logger::flush();
            process::exit(1);
        }
    }
}
