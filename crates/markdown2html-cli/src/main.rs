use anyhow::{Context, Result};
use markdown2html_engine::io;
use std::{env, process};

mod args;

use args::{Args, USAGE};

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match Args::parse_from(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            log::warn!("{e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    // Validate input before touching the output path
    if let Err(e) = io::validate_input_file(&args.input) {
        log::warn!("{e}");
        eprintln!("Missing {}", args.input.display());
        process::exit(1);
    }

    log::info!(
        "converting {} -> {}",
        args.input.display(),
        args.output.display()
    );

    let written = io::convert_file(&args.input, &args.output).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    log::info!("wrote {written} lines to {}", args.output.display());
    Ok(())
}
