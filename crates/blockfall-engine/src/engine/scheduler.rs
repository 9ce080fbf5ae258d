use std::time::Duration;

/// Host-side source of the periodic gravity tick.
///
/// The game asks for ticks when it starts and cancels them on game over; the
/// host calls [`Game::tick`](crate::Game::tick) once per elapsed interval
/// while ticks are scheduled.
pub trait TickScheduler {
    /// Starts delivering ticks every `interval`.
    ///
    /// Replaces any previous schedule and restarts its phase, so there is
    /// never more than one tick stream.
    fn schedule(&mut self, interval: Duration);

    /// Stops delivering ticks. Does nothing if none are scheduled.
    fn cancel(&mut self);
}

impl<S> TickScheduler for &mut S
where
    S: TickScheduler + ?Sized,
{
    fn schedule(&mut self, interval: Duration) {
        (**self).schedule(interval);
    }

    fn cancel(&mut self) {
        (**self).cancel();
    }
}

/// Scheduler driven by explicit calls to [`advance`](Self::advance) instead of a clock.
///
/// Used for headless games and tests: no real time passes.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::{ManualScheduler, TickScheduler as _};
///
/// let mut scheduler = ManualScheduler::new();
/// assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
///
/// scheduler.schedule(Duration::from_millis(300));
/// assert_eq!(scheduler.advance(Duration::from_millis(700)), 2);
/// assert_eq!(scheduler.advance(Duration::from_millis(200)), 1);
///
/// scheduler.cancel();
/// assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    interval: Option<Duration>,
    elapsed: Duration,
    schedule_count: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tick interval, or `None` when ticks are cancelled.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.interval.is_some()
    }

    /// Returns how many times [`schedule`](TickScheduler::schedule) has been called.
    #[must_use]
    pub fn schedule_count(&self) -> usize {
        self.schedule_count
    }

    /// Lets `elapsed` time pass and returns the number of ticks that fell due.
    ///
    /// Time that does not complete an interval carries over to the next call.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let Some(interval) = self.interval else {
            return 0;
        };
        self.elapsed += elapsed;
        let mut ticks = 0;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            ticks += 1;
        }
        ticks
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.elapsed = Duration::ZERO;
        self.schedule_count += 1;
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.elapsed = Duration::ZERO;
    }
}
