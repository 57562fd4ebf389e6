use clap::Parser;
use condeval::{Engine, EngineOptions, Variables, render_error, variables_from_json};
use condeval_core::parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

/// condeval - validate and evaluate sandboxed condition expressions
#[derive(Parser, Debug)]
#[command(name = "condeval")]
#[command(about = "Evaluate condition expressions against JSON variables", long_about = None)]
struct Args {
    /// Variables as an inline JSON object
    #[arg(long, conflicts_with = "vars_file")]
    vars: Option<String>,

    /// Read variables from a JSON file
    #[arg(long)]
    vars_file: Option<PathBuf>,

    /// Print validation messages instead of the boolean result
    #[arg(long)]
    validate: bool,

    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Maximum nesting depth
    #[arg(long, default_value_t = EngineOptions::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads one per line from stdin)
    expression: Option<String>,
}

fn load_variables(args: &Args) -> Result<Variables> {
    let text = match (&args.vars, &args.vars_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        (None, None) => return Ok(Variables::new()),
    };

    let json: serde_json::Value = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err("variables are not valid JSON")?;
    variables_from_json(json)
        .into_diagnostic()
        .wrap_err("unsupported variables")
}

/// The parsed AST as printed by `--debug-parse`, honoring `--max-depth`.
fn format_ast(source: &str, max_depth: usize) -> String {
    match parser::parse_with_max_depth(source, max_depth) {
        Ok(ast) => format!("{:#?}", ast),
        Err(e) => e.to_string(),
    }
}

/// Returns whether the expression is valid.
fn interpret_input(engine: &Engine, variables: &Variables, input: &str, args: &Args) -> bool {
    let source = input.trim();

    if args.debug_parse {
        println!("=== Parsed AST ===");
        println!("{}", format_ast(source, args.max_depth));
        println!();
    }

    match engine.check(source, variables) {
        Ok(result) => {
            if !args.validate {
                println!("{}", result);
            }
            true
        }
        Err(e) => {
            debug!(error = %e, "Invalid expression");
            if args.validate {
                println!("{}", e);
            } else {
                render_error(source, &e);
                println!("false");
            }
            false
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control the log level, defaulting to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let variables = load_variables(&args)?;
    debug!(count = variables.len(), "Loaded variables");

    let engine = Engine::new(EngineOptions {
        max_depth: args.max_depth,
    });

    let mut all_valid = true;

    if let Some(expr) = &args.expression {
        all_valid = interpret_input(&engine, &variables, expr, &args);
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line
                .into_diagnostic()
                .wrap_err("error reading line from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            all_valid &= interpret_input(&engine, &variables, &line, &args);
        }
    }

    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}
