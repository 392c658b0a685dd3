use async_stream::stream;
use futures::future::join_all;
use futures::stream::{Stream, StreamExt};
use mutator_history::{Mutator, MutatorConfig, SharedMutator};
use mutator_patch::{delete_fields, merge};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};
use std::time::{Duration, Instant};

/// Statistics collected during stress testing
#[derive(Clone, Debug)]
pub struct StressTestStats {
    pub limit: usize,
    pub total_changes: usize,
    pub undos: usize,
    pub redos: usize,
    pub evicted: usize,
    pub total_time: Duration,
    pub avg_snapshot_time: Duration,
    pub ops_per_second: f64,
}

impl StressTestStats {
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════════════════════╗");
        println!("║              Stress Test Statistics                         ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║  History Limit:             {:>38} ║", self.limit);
        println!("║  Changes Recorded:          {:>38} ║", self.total_changes);
        println!("║  Undos / Redos:             {:>38} ║", format!("{} / {}", self.undos, self.redos));
        println!("║  Changes Evicted:           {:>38} ║", self.evicted);
        println!("║  Total Time:                {:>39}s ║", format!("{:.3}", self.total_time.as_secs_f64()));
        println!("║  Average Snapshot Time:     {:>36}µs ║", format!("{:.2}", self.avg_snapshot_time.as_micros()));
        println!("║  Operations/Second:         {:>38.0} ║", self.ops_per_second);
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

#[derive(Clone, Debug)]
enum StressOp {
    Update(Value),
    Delete(Value),
    Undo,
    Redo,
}

fn random_patch(rng: &mut StdRng, depth: usize) -> Value {
    let mut patch = Map::new();
    for _ in 0..rng.gen_range(1..4) {
        let key = ["a", "b", "c", "d"][rng.gen_range(0..4)].to_string();
        let value = match rng.gen_range(0..5) {
            0 if depth > 0 => random_patch(rng, depth - 1),
            1 => json!([rng.gen_range(0..10), rng.gen_range(0..10)]),
            2 => Value::Null,
            3 => Value::Bool(rng.gen_bool(0.5)),
            _ => json!(rng.gen_range(0..1000)),
        };
        patch.insert(key, value);
    }
    Value::Object(patch)
}

/// Generator that yields a random edit session
fn edit_generator(num_ops: usize, seed: u64) -> impl Stream<Item = StressOp> {
    stream! {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_ops {
            let op = match rng.gen_range(0..10) {
                0..=4 => StressOp::Update(random_patch(&mut rng, 2)),
                5..=6 => StressOp::Delete(random_patch(&mut rng, 2)),
                7..=8 => StressOp::Undo,
                _ => StressOp::Redo,
            };
            yield op;
        }
    }
}

/// Replay a random edit session and check the engine against a straight
/// fold of the changes that are still live
pub async fn stress_test_replay(num_ops: usize, limit: usize, seed: u64) -> StressTestStats {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║        Replay Equivalence Stress Test                      ║");
    println!("║  Ops: {} | Limit: {} | Seed: {} ║", num_ops, limit, seed);
    println!("╚════════════════════════════════════════════════════════════╝");

    let start = Instant::now();
    let mut mutator = Mutator::new(MutatorConfig::with_limit(limit));
    let seed_doc = json!({"a": 0, "b": {"c": 1}});
    mutator.initialize(seed_doc.clone());

    // Live changes in order, and the redo stack, with no eviction
    let mut live: Vec<(bool, Value)> = Vec::new();
    let mut undone: Vec<(bool, Value)> = Vec::new();
    let mut floor = 0usize;

    let mut stats = StressTestStats {
        limit,
        total_changes: 0,
        undos: 0,
        redos: 0,
        evicted: 0,
        total_time: Duration::ZERO,
        avg_snapshot_time: Duration::ZERO,
        ops_per_second: 0.0,
    };
    let mut snapshot_times = vec![];

    let mut ops = Box::pin(edit_generator(num_ops, seed));
    let mut step = 0usize;
    while let Some(op) = ops.next().await {
        match op {
            StressOp::Update(patch) => {
                mutator.update(patch.clone(), Some("stress"));
                live.push((false, patch));
                undone.clear();
                stats.total_changes += 1;
            }
            StressOp::Delete(patch) => {
                mutator.delete(patch.clone(), Some("stress"));
                live.push((true, patch));
                undone.clear();
                stats.total_changes += 1;
            }
            StressOp::Undo => {
                if mutator.undo() {
                    if let Some(change) = live.pop() {
                        undone.push(change);
                    }
                    stats.undos += 1;
                }
            }
            StressOp::Redo => {
                if mutator.redo() {
                    if let Some(change) = undone.pop() {
                        live.push(change);
                    }
                    stats.redos += 1;
                }
            }
        }

        if live.len() - floor > limit {
            floor = live.len() - limit;
        }
        assert!(mutator.undo_len() <= limit, "undo stack exceeded limit");
        assert_eq!(mutator.undo_len(), live.len() - floor);

        step += 1;
        if step % 100 == 0 {
            let snapshot_start = Instant::now();
            let snapshot = mutator.get_snapshot();
            snapshot_times.push(snapshot_start.elapsed());

            let expected = live.iter().fold(seed_doc.clone(), |doc, (is_delete, patch)| {
                if *is_delete {
                    delete_fields(&doc, patch)
                } else {
                    merge(&doc, patch)
                }
            });
            assert_eq!(snapshot, expected, "snapshot diverged at step {}", step);
        }

        if step % 1000 == 0 {
            println!("  Ops completed: {}/{}", step, num_ops);
            tokio::task::yield_now().await;
        }
    }

    stats.evicted = floor;
    stats.total_time = start.elapsed();
    stats.avg_snapshot_time = if !snapshot_times.is_empty() {
        snapshot_times.iter().sum::<Duration>() / snapshot_times.len() as u32
    } else {
        Duration::ZERO
    };
    stats.ops_per_second = num_ops as f64 / stats.total_time.as_secs_f64();

    println!("✓ Snapshot matched the live change fold at every checkpoint");
    stats
}

/// Many tasks editing one shared engine
pub async fn stress_test_shared(num_writers: usize, ops_per_writer: usize, limit: usize) -> StressTestStats {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║        Shared Engine Stress Test (Async)                   ║");
    println!("║  Writers: {} | Ops/Writer: {} | Limit: {} ║", num_writers, ops_per_writer, limit);
    println!("╚════════════════════════════════════════════════════════════╝");

    let start = Instant::now();
    let shared = SharedMutator::new(MutatorConfig::with_limit(limit));
    shared.initialize(json!({}));

    let handles = (0..num_writers).map(|writer| {
        let shared = shared.clone();
        tokio::spawn(async move {
            let origin = format!("writer_{}", writer);
            for i in 0..ops_per_writer {
                let mut patch = Map::new();
                patch.insert(format!("w{}", writer), json!({ "last": i }));
                shared.update(Value::Object(patch), Some(origin.as_str()));

                if i % 100 == 0 {
                    tokio::task::yield_now().await;
                }
            }
        })
    });
    for result in join_all(handles).await {
        if let Err(err) = result {
            panic!("writer task failed: {}", err);
        }
    }

    let total_changes = num_writers * ops_per_writer;
    let snapshot_start = Instant::now();
    let snapshot = shared.get_snapshot();
    let avg_snapshot_time = snapshot_start.elapsed();

    for writer in 0..num_writers {
        assert_eq!(
            snapshot[format!("w{}", writer)]["last"],
            json!(ops_per_writer - 1),
            "writer {} lost an update",
            writer
        );
    }
    assert_eq!(shared.changes().version, total_changes as u64);

    let undo_len = shared.read().undo_len();
    let total_time = start.elapsed();

    println!("✓ All writers' final updates present");

    StressTestStats {
        limit,
        total_changes,
        undos: 0,
        redos: 0,
        evicted: total_changes - undo_len,
        total_time,
        avg_snapshot_time,
        ops_per_second: total_changes as f64 / total_time.as_secs_f64(),
    }
}

/// Snapshot cost as the history limit grows
pub async fn stress_test_scaling(max_limit: usize, step_size: usize) {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║      Scaling Analysis - Replay Cost vs History Limit      ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let mut current_limit = step_size;
    while current_limit <= max_limit {
        let stats = stress_test_replay(current_limit * 20, current_limit, current_limit as u64).await;
        stats.print();
        current_limit += step_size;
    }
}
