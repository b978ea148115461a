//! Conkie CLI - compiles a desktop widget theme and keeps it up to date
//!
//! Usage: conkie [-t <theme>] [-v...] [--watch] [--print]
//!
//! Without `--watch` the theme is compiled once and shown until Ctrl+C.
//! With `--watch` the theme directory is watched and every change triggers a
//! recompile and reload. `--print` writes the compiled document to stdout and
//! exits.

use std::cell::RefCell;
use std::io::Write;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use conkie::config::Config;
use conkie::presentation::{
    compile_options, create_theme_compiler, create_watch_use_case, watch_handler, Cli,
    ConsoleHost, DocumentHost, OutputContext, Reporter,
};
use conkie::CompileSession;

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[Conkie] ERR {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Errors returned here have not been reported yet; failed compile passes
/// are reported by the event sink and surface as `ExitCode::FAILURE`.
fn run(cli: &Cli) -> Result<ExitCode> {
    let (mut config, warnings) =
        Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);

    let ctx = OutputContext::new(&config);
    let reporter = Reporter::new(&ctx, cli.print);
    for warning in &warnings {
        reporter.warning(warning);
    }
    reporter.host_settings(&config);

    if cli.print {
        return print_document(&config, &reporter);
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("setting Ctrl+C handler")?;

    let host = RefCell::new(ConsoleHost::new(reporter.clone()));

    if config.watch {
        let use_case = create_watch_use_case(&config, reporter.events());
        return match use_case.start(running, watch_handler(&host, &reporter)) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(err) => {
                reporter.error(&err.to_string());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let compiler = create_theme_compiler(&config, reporter.events());
    let session = CompileSession::new(compile_options(&config));
    let Ok(document) = compiler.compile(&session) else {
        return Ok(ExitCode::FAILURE);
    };
    host.borrow_mut().load(document.path());

    // The document lives as long as the session; keep it until interrupted
    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));
    }
    Ok(ExitCode::SUCCESS)
}

fn print_document(config: &Config, reporter: &Reporter) -> Result<ExitCode> {
    let compiler = create_theme_compiler(config, reporter.events());
    let session = CompileSession::new(compile_options(config));
    let Ok(document) = compiler.compile(&session) else {
        return Ok(ExitCode::FAILURE);
    };

    let markup = std::fs::read_to_string(document.path())
        .with_context(|| format!("reading {}", document.path().display()))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(markup.as_bytes())?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
