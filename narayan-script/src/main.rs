use std::fs;

use clap::{Parser, Subcommand};
use narayan_script::config::DEFAULT_MAX_DEPTH;
use narayan_script::{Config, Interpreter, ScriptError, Value, parse_tokens, tokenize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "ngs")]
#[command(about = "NarayanganjScript interpreter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program
    Run {
        /// Source file, or the program itself with --eval
        input: String,

        /// Treat INPUT as source text instead of a path
        #[arg(short, long)]
        eval: bool,

        /// Print the tokens before running
        #[arg(long)]
        show_tokens: bool,

        /// Print the syntax tree before running
        #[arg(long)]
        show_ast: bool,

        /// Print the final variables after running
        #[arg(long)]
        show_vars: bool,

        /// Deepest allowed nesting of blocks and parentheses
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Print the tokens of a program
    Tokens {
        input: String,

        #[arg(short, long)]
        eval: bool,
    },

    /// Parse a program and print its syntax tree without running it
    Parse {
        input: String,

        #[arg(short, long)]
        eval: bool,

        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli.command) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr, and only when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn dispatch(command: Commands) -> Result<(), ScriptError> {
    match command {
        Commands::Run {
            input,
            eval,
            show_tokens,
            show_ast,
            show_vars,
            max_depth,
        } => {
            let config = Config::with_max_depth(max_depth);
            let source = read_source(&input, eval)?;
            let verbose = show_tokens || show_ast || show_vars;

            if verbose {
                println!("=== SOURCE ===");
                println!("{}", source.trim_end());
            }

            let tokens = tokenize(&source)?;
            if show_tokens {
                println!("=== TOKENS ===");
                for token in &tokens {
                    println!("{token}");
                }
            }

            let program = parse_tokens(tokens, &config)?;
            if show_ast {
                println!("=== AST ===");
                println!("{:#?}", program);
            }

            if verbose {
                println!("=== OUTPUT ===");
            }
            let mut interpreter = Interpreter::new(&config);
            let result = interpreter.execute(&program);

            // Variables assigned before a runtime error are still shown
            if show_vars {
                println!("=== VARIABLES ===");
                for (name, value) in interpreter.environment().iter_sorted() {
                    match value {
                        Value::Str(text) => println!("{name} = {text:?}"),
                        Value::Int(n) => println!("{name} = {n}"),
                    }
                }
            }
            result?;
        }
        Commands::Tokens { input, eval } => {
            let source = read_source(&input, eval)?;
            for token in tokenize(&source)? {
                println!("{:>4}:{:<3} {token}", token.span.line, token.span.column);
            }
        }
        Commands::Parse {
            input,
            eval,
            max_depth,
        } => {
            let source = read_source(&input, eval)?;
            let config = Config::with_max_depth(max_depth);
            let program = narayan_script::parser::parse(&source, &config)?;
            println!("{:#?}", program);
        }
    }

    Ok(())
}

fn read_source(input: &str, eval: bool) -> Result<String, ScriptError> {
    if eval {
        Ok(input.to_string())
    } else {
        Ok(fs::read_to_string(input)?)
    }
}
