//! Generate Codepage Tables
//!
//! Generates every built-in codepage table (EUC-KR, Shift_JIS-2004,
//! CP932) as a `.tbl` file.
//!
//! Usage:
//!   cargo run --release --bin generate_tables
//!   cargo run --release --bin generate_tables -- --output-dir custom/path
//!   cargo run --release --bin generate_tables -- --encoding EUC-KR

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tbl_oxide::codepages::{self, CodepageSpec};
use tbl_oxide::{sink, table, Codec};

struct GenerateConfig {
    output_dir: PathBuf,
    encoding: Option<String>,
    verbose: bool,
}

impl GenerateConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut output_dir = PathBuf::from("tables");
        let mut encoding = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = PathBuf::from(&args[i]);
                    }
                },
                "--encoding" => {
                    i += 1;
                    if i < args.len() {
                        encoding = Some(args[i].clone());
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                _ => {},
            }
            i += 1;
        }

        Self {
            output_dir,
            encoding,
            verbose,
        }
    }
}

fn generate_one(spec: &CodepageSpec, config: &GenerateConfig) -> tbl_oxide::Result<usize> {
    let codec = Codec::for_label(spec.codec_label)?;
    let entries = table::generate_table(codec, spec.ranges, codepages::CONTROL_OVERRIDES)?;

    let output_file = config.output_dir.join(spec.file_name);
    let written = sink::write_table(&output_file, &entries)?;

    if config.verbose {
        println!();
        println!("  Codec: {}", codec.name());
        println!("  Output: {}", output_file.display());
    }

    Ok(written)
}

fn main() -> ExitCode {
    env_logger::init();

    let config = GenerateConfig::from_args();

    let specs: Vec<&CodepageSpec> = match &config.encoding {
        Some(name) => match codepages::find(name) {
            Some(spec) => vec![spec],
            None => {
                eprintln!("Unknown encoding: {}", name);
                let names: Vec<&str> = codepages::all().iter().map(|s| s.name).collect();
                eprintln!("Available: {}", names.join(", "));
                return ExitCode::FAILURE;
            },
        },
        None => codepages::all().iter().collect(),
    };

    println!("Codepage Table Generator");
    println!("========================");
    println!("Output directory: {}", config.output_dir.display());
    println!();

    let start = Instant::now();
    let mut success_count = 0;
    let mut error_count = 0;

    for (i, spec) in specs.iter().enumerate() {
        print!("[{}/{}] Generating {} ... ", i + 1, specs.len(), spec.name);
        std::io::stdout().flush().unwrap();

        match generate_one(spec, &config) {
            Ok(written) => {
                println!("✓ ({} entries)", written);
                success_count += 1;
            },
            Err(e) => {
                println!("✗ Error: {}", e);
                error_count += 1;
            },
        }
    }

    let elapsed = start.elapsed();

    println!("\n{}", "=".repeat(70));
    println!("Generation Complete");
    println!("{}", "=".repeat(70));
    println!("Success: {}/{}", success_count, specs.len());
    println!("Errors: {}", error_count);
    println!("Time: {:?}", elapsed);
    println!("Output: {}", config.output_dir.display());
    println!("{}", "=".repeat(70));

    if error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
