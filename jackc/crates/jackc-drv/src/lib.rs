//! CLI driver: discovers `.jack` files, compiles each, writes `<stem>_.vm`
//! (and optionally a debug XML token trace) (§6).

mod discover;
mod xml;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;
use jackc_util::Handler;

/// Compile Jack source files to Hack VM code.
#[derive(Parser, Debug)]
#[command(name = "jackc", version, about = "Jack-to-VM compiler")]
pub struct Cli {
    /// A .jack file, or a directory of .jack files (compiled non-recursively).
    pub path: PathBuf,

    /// Emit a debug token-trace XML file alongside each VM file.
    #[arg(long)]
    pub xml: bool,

    /// Print a line per file as it's compiled.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Compiles every discovered file in order, aborting the whole run at the
/// first failure: a fatal error kills the process (§5), so a file after a
/// bad one is never attempted.
pub fn run(cli: &Cli) -> Result<()> {
    let files = discover::discover(&cli.path)?;

    for file in &files {
        if cli.verbose {
            tracing::info!(file = %file.display(), "compiling");
        }
        if let Err(err) = compile_one(file, cli.xml) {
            tracing::error!(file = %file.display(), error = %err, "compilation failed");
            return Err(anyhow!("{}: {err}", file.display()));
        }
    }
    Ok(())
}

fn compile_one(path: &Path, emit_xml: bool) -> Result<()> {
    let source = std::fs::read_to_string(path)?;
    let mut handler = Handler::new();

    if emit_xml {
        let lexer = jackc_lex::Lexer::new(&source, &mut handler);
        if !handler.has_errors() {
            let trace = xml::render_token_trace(&lexer);
            std::fs::write(xml_path(path), trace)?;
        }
    }

    let mut handler = Handler::new();
    let vm = jackc_compile::compile(&source, &mut handler)
        .map_err(|e| anyhow!("{e}"))?;
    std::fs::write(vm_path(path), vm)?;
    Ok(())
}

fn vm_path(jack_path: &Path) -> PathBuf {
    let stem = jack_path.file_stem().unwrap_or_default().to_string_lossy();
    jack_path.with_file_name(format!("{stem}_.vm"))
}

fn xml_path(jack_path: &Path) -> PathBuf {
    let stem = jack_path.file_stem().unwrap_or_default().to_string_lossy();
    jack_path.with_file_name(format!("{stem}_.xml"))
}

/// Installs a `tracing` subscriber honoring `JACKC_LOG` (default: `warn`).
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("JACKC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
