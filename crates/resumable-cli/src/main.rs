// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Resumable CLI - drives demo tasks from a plain `resume()` loop.

mod commands;
mod demos;

use std::env;
use std::process;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("run");

    match command {
        "run" => commands::cmd_run(),
        "square" => {
            if args.len() < 3 {
                eprintln!("Usage: resumable square <n>");
                process::exit(1);
            }
            commands::cmd_square(&args[2]);
        }
        "fail" => commands::cmd_fail(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("resumable {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            process::exit(1);
        }
    }
}

/// Log events go to stderr so stdout carries only task output.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=resumable_rt=trace`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    println!("resumable {} - step through resumable tasks", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: resumable [command] [args]");
    println!();
    println!("Commands:");
    println!("  run           Drive the simplest coroutine step by step (default)");
    println!("  square <n>    Drive a task that awaits a nested task");
    println!("  fail          Drive a task that panics (aborts the process)");
    println!("  help          Show this help");
    println!("  version       Show version");
}
