use crate::search::search_engines::SearchResult;
use std::time::{Duration, Instant};
use tracing::info;

/// Caller-imposed limits on a search. The searches themselves never give up
/// on their own, an unreachable target makes some of them loop forever, so
/// anything that needs bounded execution passes one of these to
/// [`SearchAgent::run_with`](crate::search::search_engines::SearchAgent::run_with).
#[derive(Debug)]
pub struct TerminationCondition {
    step_limit: Option<u64>,
    time_limit: Option<Duration>,
    steps: u64,
    start_time: Instant,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl TerminationCondition {
    pub fn new(step_limit: Option<u64>, time_limit: Option<Duration>) -> Self {
        info!(
            step_limit = step_limit,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            step_limit,
            time_limit,
            steps: 0,
            start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// No limits at all, the search runs until it finishes by itself.
    pub fn unlimited() -> Self {
        Self {
            step_limit: None,
            time_limit: None,
            steps: 0,
            start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Record that the agent acted once.
    pub fn record_step(&mut self) {
        self.steps += 1;
        self.log_if_needed();
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        info!(
            steps = self.steps,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn should_terminate(&self) -> Option<SearchResult> {
        if let Some(step_limit) = self.step_limit {
            if self.steps >= step_limit {
                info!(steps = self.steps, "step limit reached");
                return Some(SearchResult::StepLimitReached);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                info!(
                    time_elapsed = self.start_time.elapsed().as_secs_f64(),
                    "time limit exceeded"
                );
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        None
    }
}
