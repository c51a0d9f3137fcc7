use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use letlang::{
    format_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
    render::{dot::render_dot, tree::render_tree},
};
use tracing::{info, warn, Level};

/// Parse a `let` statement and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Source file to parse; reads stdin when neither a path nor --expr is given
    path: Option<PathBuf>,

    /// Parse this source text instead of a file
    #[arg(short, long, conflicts_with = "path")]
    expr: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Indented outline of the tree
    Tree,
    /// Graphviz source
    Dot,
    /// Single-line nested form
    Sexpr,
    /// The token stream, one token per line
    Tokens,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = read_source(&args)?;
    info!(file = %file_name, bytes = source.len(), "read source");

    if let Format::Tokens = args.format {
        for token in tokenize(source, Some(file_name)) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut parser = Parser::new(Lexer::new(source.clone(), Some(file_name)));
    let stmt = match parser.parse() {
        Ok(stmt) => stmt,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            return Ok(ExitCode::FAILURE);
        }
    };

    if !parser.is_at_end() {
        warn!(
            position = parser.get_position().0,
            "ignoring input after the first statement"
        );
    }

    match args.format {
        Format::Tree => print!("{}", render_tree(&stmt)),
        Format::Dot => print!("{}", render_dot(&stmt)),
        Format::Sexpr => println!("{}", stmt),
        Format::Tokens => unreachable!(),
    }

    Ok(ExitCode::SUCCESS)
}

/// Returns the source text and the name it is reported under.
fn read_source(args: &Args) -> Result<(String, String)> {
    if let Some(expr) = &args.expr {
        return Ok((expr.clone(), String::from("shell")));
    }

    if let Some(path) = &args.path {
        let source = read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Ok((source, file_name));
    }

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    Ok((source, String::from("stdin")))
}
