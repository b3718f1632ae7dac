// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Task bodies the commands drive.

use resumable_rt::suspend;

/// Three suspension points, printing its progress between them.
pub async fn simplest_coroutine() {
    let mut i = 0;

    println!("Simplest coroutine started...");
    i += 1;

    suspend().await;

    println!("Step: {}", i);
    i += 1;

    suspend().await;

    println!("Step: {}", i);

    suspend().await;

    println!("End of simplest coroutine");
}

pub async fn calculate_square(n: i64) -> i64 {
    println!("Starting calculation for {}", n);
    suspend().await;
    println!("Calculation done for {}", n);
    n * n
}

/// Awaits `calculate_square`; its suspension surfaces through this task.
pub async fn processing_value(n: i64) -> String {
    println!("Processing started for {}", n);
    suspend().await;
    let square = calculate_square(n).await;
    println!("Processing done for {}", n);
    format!("Square of {} is {}", n, square)
}

/// Suspends once, then panics.
pub async fn failing_coroutine() {
    println!("Failing coroutine started...");
    suspend().await;
    panic!("failing coroutine gave up on its second step");
}
