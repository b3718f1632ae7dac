// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Command implementations.

use std::process;

use resumable_rt::TaskBuilder;

use crate::demos;

/// Drive the reference coroutine with a `while resume()` loop.
pub fn cmd_run() {
    let mut task = TaskBuilder::new()
        .name("simplest")
        .build(demos::simplest_coroutine());

    while task.resume() {
        println!("Caller!!!");
    }

    println!("Steps: {}", task.steps());
}

pub fn cmd_square(arg: &str) {
    let n: i64 = match arg.parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: invalid number `{}`: {}", arg, e);
            process::exit(1);
        }
    };
    if n.checked_mul(n).is_none() {
        eprintln!("error: square of {} does not fit in 64 bits", n);
        process::exit(1);
    }

    let task = TaskBuilder::new()
        .name("processing_value")
        .build(demos::processing_value(n));

    match task.run_to_completion() {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// A panic in the body aborts the whole process.
pub fn cmd_fail() {
    let mut task = TaskBuilder::new()
        .name("failing")
        .build(demos::failing_coroutine());

    while task.resume() {
        println!("Caller!!!");
    }

    // Unreachable under the default failure policy.
    println!("Steps: {}", task.steps());
}
