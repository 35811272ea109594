use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dv_core::config::{DevolveOptions, load_config};
use dv_devolve::context::Status;

pub mod batch;
pub mod cli;

/// Usage, configuration, open, or I/O failure.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    // 1. Parser CLI (usage error: clap sort avec le code 2)
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    // 3. Convertir
    match run(&cli) {
        Ok(status) => ExitCode::from(u8::try_from(status.code()).unwrap_or(EXIT_FATAL)),
        Err(e) => {
            eprintln!("charset-devolve: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: &cli::Cli) -> Result<Status> {
    let options = resolve_options(cli)?;
    log::debug!("Options : {options:?}");
    if options.any_trace() {
        log::info!("Traces actives sur la sortie d'erreur");
    }

    // Tous les fichiers sont vérifiés avant la première écriture.
    let inputs = batch::probe_inputs(&cli.files)?;
    if cli.is_verbose() {
        let names: Vec<String> = inputs.iter().map(batch::Input::name).collect();
        log::info!("Fichiers : {}", names.join(", "));
    }

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    batch::run_batch(&inputs, &options, &mut out, &mut diag)
}

/// Defaults, then `--config`, then command-line flags.
fn resolve_options(cli: &cli::Cli) -> Result<DevolveOptions> {
    let mut options = match cli.config {
        Some(ref path) => load_config(path)?,
        None => DevolveOptions::default(),
    };
    cli.apply(&mut options);
    Ok(options)
}
