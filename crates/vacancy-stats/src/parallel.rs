//! Year-partitioned aggregation.

use std::thread;

use tracing::debug;

use crate::aggregate::{Accumulator, Statistics};
use crate::record::StatsVacancy;

/// Aggregates each publication year on its own thread, then merges.
///
/// Produces the same [`Statistics`] as the sequential aggregation: every
/// partition keeps the input position of its records, so city order survives
/// the merge.
pub fn aggregate_partitioned(records: &[StatsVacancy], job: &str) -> Statistics {
    let mut partitions: Vec<(i32, Vec<usize>)> = Vec::new();
    for (position, record) in records.iter().enumerate() {
        match partitions.iter_mut().find(|(year, _)| *year == record.year) {
            Some((_, positions)) => positions.push(position),
            None => partitions.push((record.year, vec![position])),
        }
    }
    debug!(partitions = partitions.len(), "aggregating by year");

    let mut merged = Accumulator::new(job);
    thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .iter()
            .map(|(_, positions)| {
                scope.spawn(move || {
                    let mut accumulator = Accumulator::new(job);
                    for &position in positions {
                        accumulator.add(position, &records[position]);
                    }
                    accumulator
                })
            })
            .collect();
        for handle in handles {
            match handle.join() {
                Ok(partial) => merged.merge(partial),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });
    merged.finish()
}
