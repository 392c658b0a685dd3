use stress_test::{stress_test_replay, stress_test_scaling, stress_test_shared};
use tracing_subscriber::EnvFilter;
pub mod stress_test;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_main());
    Ok(())
}

async fn async_main() {

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            HISTORY ENGINE STRESS TESTS                      ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Test 1: small limit, eviction on almost every change
    let stats = stress_test_replay(2_000, 3, 7).await;
    stats.print();

    // Test 2: default limit
    let stats = stress_test_replay(5_000, 50, 42).await;
    stats.print();

    // Test 3: shared engine under concurrent writers
    let stats = stress_test_shared(8, 500, 50).await;
    stats.print();

    // Test 4: Scaling analysis
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║          SCALING ANALYSIS (Replay)                          ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    stress_test_scaling(200, 50).await;

    println!("\n✓ All stress tests completed successfully!");
}
