//! Batch driver: runs the selected algorithms over parsed instances and times each call.
//!
//! Instances share nothing, so with [`Config::parallel`] set they are solved concurrently on
//! the `rayon` thread pool. Records always come back ordered by algorithm, then instance.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cs::graph::hamiltonian::{Algorithm, HamiltonianSolver};
use crate::error::Result;
use crate::instance::Instance;
use crate::report::Record;

#[derive(Clone, Debug)]
pub struct Config {
    pub algorithms: Vec<Algorithm>,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithms: vec![Algorithm::Backtracking],
            parallel: false,
        }
    }
}

/// Solves every instance with every configured algorithm.
///
/// # Errors
/// Fails on the first unsupported algorithm.
///
/// # Example
/// ```
/// use hamilton::driver::{run, Config};
/// use hamilton::instance::parse_instances;
///
/// let batch = parse_instances("p edge 3 3\n1 2\n2 3\n3 1\n").unwrap();
/// let records = run(&batch, &Config::default()).unwrap();
/// assert_eq!(records[0].cycle, Some(vec![1, 2, 3, 1]));
/// ```
pub fn run(instances: &[Instance], config: &Config) -> Result<Vec<Record>> {
    let mut records = Vec::with_capacity(instances.len() * config.algorithms.len());
    for &algorithm in &config.algorithms {
        info!(
            "solving {} instance(s) with {algorithm}{}",
            instances.len(),
            if config.parallel { " in parallel" } else { "" }
        );
        let batch: Vec<Record> = if config.parallel {
            instances
                .par_iter()
                .map(|instance| solve_timed(instance, algorithm))
                .collect::<Result<_>>()?
        } else {
            instances
                .iter()
                .map(|instance| solve_timed(instance, algorithm))
                .collect::<Result<_>>()?
        };
        records.extend(batch);
    }
    Ok(records)
}

/// Solves one instance and measures the wall-clock time of the search alone.
pub fn solve_timed(instance: &Instance, algorithm: Algorithm) -> Result<Record> {
    let started = Instant::now();
    let solution = algorithm.solve(&instance.graph)?;
    let elapsed = started.elapsed();
    debug!(
        "instance {} [{algorithm}]: path={} cycle={} largest={} in {:?}",
        instance.id,
        solution.path_found(),
        solution.cycle_found(),
        solution.largest_cycle,
        elapsed
    );
    Ok(Record {
        instance_id: instance.id.clone(),
        vertex_count: instance.vertex_count,
        edge_count: instance.edge_count,
        path: solution.path,
        cycle: solution.cycle,
        largest_cycle: solution.largest_cycle,
        algorithm: algorithm.name(),
        elapsed,
    })
}
