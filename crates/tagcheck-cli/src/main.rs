use clap::{Parser, Subcommand};
use tagcheck_lexer::{is_void_element, Scanner, Token};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagcheck")]
#[command(about = "tagcheck — tag balance checker for HTML/JSX-like markup")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report unbalanced, mismatched and unclosed tags in a file
    Check {
        /// Input markup file
        path: String,
    },

    /// Print the tag tokens found in a file
    Tokens {
        /// Input markup file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check { path } => cmd_check(&path),
        Command::Tokens { path } => cmd_tokens(&path),
    }
}

/// Logs go to stderr so stdout only carries diagnostics.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_check(path: &str) {
    let diagnostics = match tagcheck_checker::analyze(path) {
        Ok(diagnostics) => diagnostics,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Diagnostics are findings, not failures: exit status stays 0.
    for diagnostic in &diagnostics {
        println!("{diagnostic}");
    }
    tracing::info!("{path}: {} diagnostics", diagnostics.len());
}

fn cmd_tokens(path: &str) {
    let source = match tagcheck_checker::read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for token in Scanner::tokenize(&source) {
        println!("{}", describe(&token));
    }
}

fn describe(token: &Token) -> String {
    let tag = match (token.is_closing, token.self_closing) {
        (true, _) => format!("</{}>", token.name),
        (false, true) => format!("<{}/>", token.name),
        (false, false) => format!("<{}>", token.name),
    };
    let void = if is_void_element(&token.name) {
        " (void)"
    } else {
        ""
    };
    format!("{}:{} {tag}{void}", token.span.line, token.span.column)
}
