use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of positions the environment was signalled to visit
    expanded_nodes: i64,
    /// Number of extended paths inserted into the frontier
    generated_paths: i64,
    /// Number of extensions rejected by cycle, visited or bound pruning
    pruned_paths: i64,
    /// Number of frontier entries discarded because their terminal position
    /// had been expanded since they were queued
    stale_paths: i64,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Most recent cost bound, only used by bounded searches
    bound: Option<HeuristicValue>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_paths: 0,
            pruned_paths: 0,
            stale_paths: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            bound: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn register_bound(&mut self, bound: HeuristicValue) {
        self.bound = Some(bound);
        info!(bound = bound.into_inner());
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_paths(&mut self, num_paths: usize) {
        self.generated_paths += num_paths as i64;
        self.log_if_needed();
    }

    pub fn increment_pruned_paths(&mut self) {
        self.pruned_paths += 1;
        self.log_if_needed();
    }

    pub fn increment_stale_paths(&mut self) {
        self.stale_paths += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_paths(&self) -> i64 {
        self.generated_paths
    }

    pub fn pruned_paths(&self) -> i64 {
        self.pruned_paths
    }

    pub fn stale_paths(&self) -> i64 {
        self.stale_paths
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_paths = self.generated_paths,
            pruned_paths = self.pruned_paths,
            stale_paths = self.stale_paths,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
            bound = self.bound.map(|bound| bound.into_inner()),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
