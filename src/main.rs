// Arithmos: arithmetic expression front end

mod ui;

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use arithmos::Error;
use ui::Reporter;

/// Lex and parse arithmetic expressions, printing the syntax tree or a
/// diagnostic pointing at the offending span.
#[derive(Debug, Parser)]
#[command(name = "arithmos", author, version, long_about = None)]
struct Args {
    /// Source file holding one expression; reads stdin line by line when omitted
    file: Option<PathBuf>,

    /// Parse EXPR given on the command line
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Print the token stream instead of the syntax tree
    #[arg(short, long)]
    tokens: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let reporter = Reporter::new(!args.no_color && io::stderr().is_terminal());

    if let Some(expr) = &args.expr {
        let status = run_once(&reporter, "<arg>", expr, args.tokens);
        return Ok(ExitCode::from(status));
    }

    if let Some(path) = &args.file {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        tracing::info!("parsing {}", path.display());
        let name = path.display().to_string();
        let status = run_once(&reporter, &name, strip_line_terminators(&source), args.tokens);
        return Ok(ExitCode::from(status));
    }

    shell(&reporter, args.tokens)?;
    Ok(ExitCode::SUCCESS)
}

/// Read expressions from stdin, one per line, until end of input.
fn shell(reporter: &Reporter, tokens_only: bool) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut line = String::new();

    if interactive {
        println!("{}", reporter.banner());
    }

    loop {
        if interactive {
            print!("{}", reporter.prompt());
            stdout.flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let text = strip_line_terminators(&line);
        if text.trim().is_empty() {
            continue;
        }
        run_once(reporter, "<stdin>", text, tokens_only);
    }

    Ok(())
}

/// Line terminators are not part of the language.
fn strip_line_terminators(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '\n' || c == '\r')
}

/// Process one source unit and print its outcome; returns the exit status.
fn run_once(reporter: &Reporter, name: &str, text: &str, tokens_only: bool) -> u8 {
    match process(reporter, name, text, tokens_only) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(err) => {
            eprintln!("{}", reporter.diagnostic(&err));
            1
        }
    }
}

fn process(
    reporter: &Reporter,
    name: &str,
    text: &str,
    tokens_only: bool,
) -> Result<String, Error> {
    if tokens_only {
        let tokens = arithmos::tokenize(name, text)?;
        Ok(reporter.tokens(&tokens))
    } else {
        Ok(arithmos::run(name, text)?.to_string())
    }
}
