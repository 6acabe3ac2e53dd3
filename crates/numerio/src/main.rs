// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numerio - stateless math tools for agent frameworks.
//!
//! The binary is a thin front door over the tool registry: each
//! subcommand builds the same JSON input an agent framework would send
//! and prints the tool's JSON record to stdout.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Numerio - stateless math tools for agent frameworks.
#[derive(Parser, Debug)]
#[command(name = "numerio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a mathematical expression.
    Eval {
        /// The expression, e.g. "sqrt(16) * 3".
        expression: String,
    },
    /// Check integers for primality.
    Primes {
        /// The integers to classify.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Compute the factorial of a non-negative integer.
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Generate the first n Fibonacci terms and their sum.
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Print the Anthropic-format tool definitions.
    Tools,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match numerio_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            numerio_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    // NUMERIO_LOG (e.g. "numerio_expr=trace") overrides the config level.
    let filter = EnvFilter::try_from_env("NUMERIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = numerio_tools::registry_with_limits(
        config.limits.factorial_max,
        config.limits.fibonacci_max,
    );

    let (name, input) = match cli.command {
        Some(Commands::Eval { expression }) => ("calculate", json!({ "expression": expression })),
        Some(Commands::Primes { numbers }) => ("is_prime", json!({ "numbers": numbers })),
        Some(Commands::Factorial { n }) => ("factorial", json!({ "n": n })),
        Some(Commands::Fib { n }) => ("fibonacci", json!({ "n": n })),
        Some(Commands::Tools) => {
            match serde_json::to_string_pretty(&registry.tool_definitions()) {
                Ok(defs) => println!("{defs}"),
                Err(err) => {
                    eprintln!("numerio: {err}");
                    return ExitCode::FAILURE;
                }
            }
            return ExitCode::SUCCESS;
        }
        None => {
            println!("numerio: use --help for available commands");
            return ExitCode::SUCCESS;
        }
    };

    debug!(tool = name, "invoking tool");
    let Some(tool) = registry.get(name) else {
        eprintln!("numerio: unknown tool {name}");
        return ExitCode::FAILURE;
    };
    match tool.invoke(input).await {
        Ok(output) => {
            println!("{}", output.content);
            if output.is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("numerio: {err}");
            ExitCode::FAILURE
        }
    }
}
