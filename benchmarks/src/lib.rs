//! Shared helpers for digen benchmark suites.

use digen_kernel::proof::canon::canonical_json_bytes;
use digen_kernel::proof::hash::{canonical_hash, ContentHash};
use digen_kernel::proof::hash_domain::HashDomain;
use digen_kernel::rng::SeededSource;
use digen_search::beam::by_beam;
use digen_search::breadth::{in_width, BreadthResult};
use digen_search::depth::in_depth;
use digen_search::parallel::parallel;
use digen_search::policy::SearchPolicyV1;
use digen_search::strategy::Strategy;

/// One measured input: endpoints, batch size and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub name: &'static str,
    pub start: u64,
    pub target: u64,
    pub tests: usize,
    pub seed: u64,
}

/// Workloads shared by the macro and auditable suites, smallest first.
///
/// Every target is reachable from its start, so all four strategies finish
/// under the default policy.
#[must_use]
pub fn standard_workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "len3_reverse",
            start: 123,
            target: 321,
            tests: 100,
            seed: 1,
        },
        Workload {
            name: "len4_reverse",
            start: 1234,
            target: 4321,
            tests: 100,
            seed: 2,
        },
        Workload {
            name: "len5_reverse",
            start: 12_345,
            target: 54_321,
            tests: 50,
            seed: 3,
        },
        Workload {
            name: "len6_reverse",
            start: 123_456,
            target: 654_321,
            tests: 20,
            seed: 4,
        },
    ]
}

/// Digest pinning what a workload measured, under [`HashDomain::BenchInput`].
///
/// # Panics
///
/// Panics if canonical serialization fails. Benchmark setup failures are fatal.
#[must_use]
pub fn workload_digest(workload: &Workload, policy: &SearchPolicyV1) -> ContentHash {
    let value = serde_json::json!({
        "name": workload.name,
        "start": workload.start,
        "target": workload.target,
        "tests": workload.tests,
        "seed": workload.seed,
        "max_iterations": policy.max_iterations,
        "max_frontier_len": policy.max_frontier_len,
    });
    let bytes = canonical_json_bytes(&value).expect("canon");
    canonical_hash(HashDomain::BenchInput, &bytes)
}

/// Run breadth search on a workload.
///
/// # Panics
///
/// Panics if the search fails. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_breadth(workload: &Workload, policy: &SearchPolicyV1) -> BreadthResult {
    in_width(workload.start, workload.target, policy).expect("in_width should succeed in benchmarks")
}

/// Run one stochastic strategy on a workload with a fresh seeded source.
///
/// # Panics
///
/// Panics if `strategy` is [`Strategy::Breadth`] or the walk fails.
#[must_use]
pub fn run_walk(strategy: Strategy, workload: &Workload, policy: &SearchPolicyV1) -> Vec<u64> {
    let mut source = SeededSource::new(workload.seed);
    let (start, target, tests) = (workload.start, workload.target, workload.tests);
    let result = match strategy {
        Strategy::Depth => in_depth(start, target, tests, &mut source, policy),
        Strategy::Beam => by_beam(start, target, tests, &mut source, policy),
        Strategy::Parallel => parallel(start, target, tests, &mut source, policy),
        Strategy::Breadth => panic!("breadth search is not a walk; use run_breadth"),
    };
    result.expect("walk should succeed in benchmarks")
}
