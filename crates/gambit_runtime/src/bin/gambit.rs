//! Gambit CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use gambit_runtime::{
    PipelineOptions, Repl, RuntimeConfig, document_to_json, generate_rule_pipeline,
};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    json_output: bool,
    force_fallback: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--json" => config.json_output = true,
            "--force-fallback" => config.force_fallback = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("gambit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let options = PipelineOptions {
        force_fallback: config.force_fallback,
    };

    // Each line of each file is one rule instruction.
    for file in &config.files {
        let content = fs::read_to_string(file)
            .map_err(|e| format!("failed to read {}: {e}", file.display()))?;
        for instruction in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let result = generate_rule_pipeline(instruction, &options)?;
            if config.json_output {
                println!("{}", document_to_json(&result.document, true)?);
            } else {
                println!(
                    "{}: validation {}, dry run {}",
                    result.document.meta.id,
                    if result.validation.is_valid {
                        "ok"
                    } else {
                        "invalid"
                    },
                    if result.dry_run.passed {
                        "passed"
                    } else {
                        "failed"
                    }
                );
            }
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    let repl_config = if config.files.is_empty() {
        RuntimeConfig::new()
    } else {
        RuntimeConfig::new().without_banner()
    };
    let mut repl = Repl::new(repl_config)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mGambit\x1b[0m - chess-variant rule authoring pipeline

\x1b[1mUSAGE:\x1b[0m
    gambit [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Instruction files to compile (one instruction per line)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Compile files and exit (no shell)
    --json              Print compiled rule documents as JSON
    --force-fallback    Always generate a fallback provider

\x1b[1mEXAMPLES:\x1b[0m
    gambit                        Start the authoring shell
    gambit rules.txt              Compile rules.txt, then start the shell
    gambit -b --json rules.txt    Compile to JSON and exit

\x1b[1mSHELL COMMANDS:\x1b[0m
    :json / :plan        Inspect the last compiled rule
    :save / :load PATH   Snapshot or restore the rulebook
    :fallback            Toggle forced fallback generation
    Ctrl+D               Exit"
    );
}
