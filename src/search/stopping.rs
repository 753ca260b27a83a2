use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/** decides when a search must stop. Checked by the backtracking before each descent. */
pub trait StoppingCriterion {
    /// true if the search should stop now
    fn is_finished(&self) -> bool;
}

/** never stops: the search runs until it proves or refutes the number of colors */
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverStoppingCriterion;

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&self) -> bool { false }
}

/** stops after a given number of seconds */
#[derive(Debug, Clone, Copy)]
pub struct TimeStoppingCriterion {
    start: Instant,
    time_limit: f32,
}

impl TimeStoppingCriterion {
    /// starts the clock now. t: time limit in seconds
    pub fn new(t:f32) -> Self {
        Self { start: Instant::now(), time_limit: t }
    }

    /// seconds elapsed since the creation of the criterion
    pub fn elapsed(&self) -> f32 { self.start.elapsed().as_secs_f32() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.elapsed() >= self.time_limit }
}

/** stops when the shared flag is raised (e.g. from another thread or a signal handler) */
#[derive(Debug, Default, Clone)]
pub struct FlagStoppingCriterion {
    flag: Arc<AtomicBool>,
}

impl FlagStoppingCriterion {
    /// creates a lowered flag
    pub fn new() -> Self { Self::default() }

    /// raises the flag. All the clones of this criterion stop.
    pub fn stop(&self) { self.flag.store(true, Ordering::Relaxed); }
}

impl StoppingCriterion for FlagStoppingCriterion {
    fn is_finished(&self) -> bool { self.flag.load(Ordering::Relaxed) }
}

impl<S:StoppingCriterion+?Sized> StoppingCriterion for &S {
    fn is_finished(&self) -> bool { (**self).is_finished() }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag() {
        let stop = FlagStoppingCriterion::new();
        let shared = stop.clone();
        assert!(!shared.is_finished());
        stop.stop();
        assert!(shared.is_finished());
    }

    #[test]
    fn test_time() {
        assert!(TimeStoppingCriterion::new(0.).is_finished());
        assert!(!TimeStoppingCriterion::new(3600.).is_finished());
        assert!(!NeverStoppingCriterion.is_finished());
    }
}
