use clap::Parser;
use std::{fmt::Write as _, fs, path::PathBuf, time::Instant};
use tinyc::{
    ast,
    frontend::{lexer::scan, Token},
    parse_tokens, read,
    utils::errors::{TinyError, TinyResult},
    SyntaxTree,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Syntax checker for the TINY language",
    long_about = "Syntax checker for the TINY language.\n\
                 Scans and parses a TINY program, reports every syntax error with its line\n\
                 and keeps going after each one.\n\
                 \n\
                 Example usage:\n\
                 tinyc sample.tny                   # Report syntax errors\n\
                 tinyc sample.tny --show-ast        # Print the syntax tree\n\
                 tinyc sample.tny --trace-scan      # Echo every scanned token\n\
                 tinyc sample.tny --print-source    # Print the program rebuilt from its tree\n\
                 tinyc sample.tny -o sample.lst     # Write the listing to a file\n\
                 tinyc sample.tny --timing          # Show phase timing"
)]
struct Cli {
    // The path to the file to parse
    path: PathBuf,

    // Listing file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    // Echo each token as it is scanned
    #[arg(short = 's', long)]
    trace_scan: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Print the source text rebuilt from the AST
    #[arg(long)]
    print_source: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show phase timing
    #[arg(short, long)]
    timing: bool,
}

// Statistics for performance analysis
#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
    error_count: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .try_init();
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut CompilationStats) -> Vec<Token> {
    let lexer_start = Instant::now();
    let tokens = scan(source);
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    tracing::info!(tokens = tokens.len(), seconds = stats.lexer_time, "lexical analysis completed");
    tokens
}

// Perform parsing phase
fn parsing_phase(tokens: Vec<Token>, stats: &mut CompilationStats) -> SyntaxTree {
    let parser_start = Instant::now();
    let tree = parse_tokens(tokens);
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.token_count = tree.token_count;
    stats.ast_size = tree.root().map_or(0, |root| root.as_node().count());
    stats.error_count = tree.diagnostics.len();
    tracing::info!(
        nodes = stats.ast_size,
        errors = stats.error_count,
        seconds = stats.parser_time,
        "parsing completed"
    );
    tree
}

fn trace_listing(out: &mut String, tokens: &[Token]) -> std::fmt::Result {
    for token in tokens {
        writeln!(out, "\t{}: {}", token.line, token)?;
    }
    writeln!(out, "\t{}: EOF", tokens.last().map_or(1, |token| token.line))
}

// Main compilation function: returns the listing text, the error flag and stats
fn compile(input_path: &PathBuf, args: &Cli) -> TinyResult<(String, bool, CompilationStats)> {
    let start_time = Instant::now();
    let mut stats = CompilationStats::default();

    // Validate input file exists
    if !input_path.exists() {
        return Err(TinyError::compilation_error(
            "file not found",
            format!("Input file does not exist: {}", input_path.display()),
        ));
    }

    let source_str = read(input_path)?;
    tracing::info!(bytes = source_str.len(), path = %input_path.display(), "read input file");

    let mut listing = String::new();
    let write_err = |_: std::fmt::Error| TinyError::FileWriteError("could not format listing".to_string());
    writeln!(listing, "\nTINY COMPILATION: {}", input_path.display()).map_err(write_err)?;

    let tokens = lexical_analysis(&source_str, &mut stats);
    if args.trace_scan {
        trace_listing(&mut listing, &tokens).map_err(write_err)?;
    }

    let tree = parsing_phase(tokens, &mut stats);
    for diagnostic in &tree.diagnostics {
        writeln!(listing, ">>> {}", diagnostic).map_err(write_err)?;
    }

    if args.show_ast {
        writeln!(listing, "\nSyntax tree:").map_err(write_err)?;
        match tree.root() {
            Some(root) => listing.push_str(&ast::listing(Some(root))),
            None => listing.push_str("  (empty)\n"),
        }
    }

    if args.print_source {
        writeln!(listing, "\nSource:").map_err(write_err)?;
        listing.push_str(&ast::to_source(tree.root()));
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    Ok((listing, tree.has_errors(), stats))
}

// Print detailed compilation statistics
fn print_stats(stats: &CompilationStats) {
    println!("\n Compilation Statistics:");
    println!("  Lexical Analysis   {:>8.3}s", stats.lexer_time);
    println!("  Parsing            {:>8.3}s", stats.parser_time);
    println!("  Total Time         {:>8.3}s", stats.total_time);
    println!("\n Code Metrics:");
    println!("  Tokens:            {}", stats.token_count);
    println!("  AST Nodes:         {}", stats.ast_size);
    println!("  Syntax Errors:     {}", stats.error_count);
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match compile(&args.path, &args) {
        Ok((listing, has_errors, stats)) => {
            match &args.output {
                Some(path) => {
                    if let Err(e) = fs::write(path, &listing) {
                        fatal(&format!("Failed to write listing file '{}': {}", path.display(), e));
                    }
                    tracing::info!(path = %path.display(), "listing written");
                }
                None => print!("{}", listing),
            }

            if args.timing {
                print_stats(&stats);
            }

            if has_errors {
                fatal(&format!("{} syntax error(s) in {}", stats.error_count, args.path.display()));
            }
            if args.verbose {
                println!("Parse successful!");
            }
        }
        Err(e) => fatal(&format!("Compilation failed: {}", e)),
    }
}
