//! Cooperative, cancellable command execution.
//!
//! The executor owns the queue and runs exactly one command per turn. The
//! host decides when the next turn happens: [`Executor::run`] yields the
//! thread between turns, a UI loop can call [`Executor::turn`] from its own
//! idle callback instead.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::compile::DrawCommand;
use crate::device::{Device, Surface};
use crate::output::Observer;

/// Progress is reported only when the remaining count is a multiple of this.
pub const PROGRESS_EVERY: usize = 50;

/// Minimum wall-clock time between progress reports.
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(2);

/// Source of monotonic time, as an offset from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Where an execution is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No turn has run yet.
    Ready,
    /// Commands remain and no stop was requested.
    Running,
    /// Every command ran.
    Drained,
    /// The cancellation predicate fired.
    Stopped,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Drained | Status::Stopped)
    }
}

/// Bookkeeping for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionState {
    pub total: usize,
    pub remaining: usize,
    pub started: Duration,
    pub last_report: Duration,
}

impl ExecutionState {
    pub fn completed(&self) -> usize {
        self.total - self.remaining
    }

    /// Estimated time left at `now`, extrapolated linearly from the
    /// commands completed so far. `None` before anything completed.
    pub fn eta(&self, now: Duration) -> Option<Duration> {
        let completed = self.completed();
        if completed == 0 {
            return None;
        }
        let elapsed = now.saturating_sub(self.started).as_secs_f64();
        let estimated_total = elapsed * (self.total as f64 / completed as f64);
        Some(Duration::from_secs_f64((estimated_total - elapsed).max(0.0)))
    }
}

/// Runs a compiled command sequence one command per turn.
pub struct Executor<'a, C: Clock = SystemClock> {
    queue: VecDeque<DrawCommand>,
    state: ExecutionState,
    status: Status,
    clock: C,
    should_stop: Option<Box<dyn FnMut() -> bool + 'a>>,
    observer: &'a dyn Observer,
}

impl<'a> Executor<'a, SystemClock> {
    pub fn new(commands: Vec<DrawCommand>, observer: &'a dyn Observer) -> Self {
        Self::with_clock(commands, SystemClock::default(), observer)
    }
}

impl<'a, C: Clock> Executor<'a, C> {
    pub fn with_clock(commands: Vec<DrawCommand>, clock: C, observer: &'a dyn Observer) -> Self {
        let total = commands.len();
        Self {
            queue: commands.into(),
            state: ExecutionState {
                total,
                remaining: total,
                started: Duration::ZERO,
                last_report: Duration::ZERO,
            },
            status: Status::Ready,
            clock,
            should_stop: None,
            observer,
        }
    }

    /// Install a cancellation predicate, polled once at the start of each turn.
    pub fn with_cancel(mut self, should_stop: impl FnMut() -> bool + 'a) -> Self {
        self.should_stop = Some(Box::new(should_stop));
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Run one scheduling turn.
    ///
    /// Finishes if the queue is empty, stops if the predicate fires, and
    /// otherwise executes the next command. Terminal states are sticky.
    pub fn turn<T: Surface + Device + ?Sized>(&mut self, target: &mut T) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }

        if self.status == Status::Ready {
            let now = self.clock.now();
            self.state.started = now;
            self.state.last_report = now;
            self.status = Status::Running;
            self.observer
                .log(&format!("Processing {} commands...", self.state.total));
        }

        let Some(command) = self.queue.pop_front() else {
            let elapsed = self.clock.now().saturating_sub(self.state.started);
            self.observer.log(&format!(
                "Processing finished in {:.2}ms.",
                elapsed.as_secs_f64() * 1000.0
            ));
            self.status = Status::Drained;
            return self.status;
        };

        if let Some(should_stop) = self.should_stop.as_mut() {
            if should_stop() {
                self.queue.push_front(command);
                self.observer.log("Processing stopped.");
                self.status = Status::Stopped;
                return self.status;
            }
        }

        command.apply(target);
        self.state.remaining = self.queue.len();
        self.report_progress();

        self.status
    }

    /// Drive turns until the queue drains or the predicate fires, yielding
    /// the thread between turns.
    pub fn run<T: Surface + Device + ?Sized>(&mut self, target: &mut T) -> Status {
        loop {
            let status = self.turn(target);
            if status.is_terminal() {
                return status;
            }
            thread::yield_now();
        }
    }

    fn report_progress(&mut self) {
        let now = self.clock.now();
        let remaining = self.state.remaining;

        if remaining == 0
            || remaining % PROGRESS_EVERY != 0
            || now.saturating_sub(self.state.last_report) <= PROGRESS_INTERVAL
        {
            return;
        }

        let Some(eta) = self.state.eta(now) else {
            return;
        };
        let percent = self.state.completed() as f64 / self.state.total as f64 * 100.0;

        self.observer.log(&format!(
            "{:.1}% complete ({} commands remaining, ~{:.1}s left)",
            percent,
            remaining,
            eta.as_secs_f64()
        ));
        self.state.last_report = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Silent;
    use crate::testing::Recorder;
    use crate::types::{Colour, Point};
    use std::cell::{Cell, RefCell};

    /// Advances by a fixed tick every time it is read.
    struct TickClock {
        now: Cell<Duration>,
        tick: Duration,
    }

    impl TickClock {
        fn new(tick: Duration) -> Self {
            Self {
                now: Cell::new(Duration::ZERO),
                tick,
            }
        }
    }

    impl Clock for TickClock {
        fn now(&self) -> Duration {
            let now = self.now.get();
            self.now.set(now + self.tick);
            now
        }
    }

    fn diameters(n: u32) -> Vec<DrawCommand> {
        (1..=n).map(DrawCommand::SetDiameter).collect()
    }

    #[test]
    fn test_runs_all_commands_in_order() {
        let mut rec = Recorder::default();
        let mut executor = Executor::new(diameters(5), &Silent);

        assert_eq!(executor.status(), Status::Ready);
        assert_eq!(executor.run(&mut rec), Status::Drained);
        assert_eq!(
            rec.calls,
            vec!["diameter 1", "diameter 2", "diameter 3", "diameter 4", "diameter 5"]
        );
        assert_eq!(executor.state().remaining, 0);
    }

    #[test]
    fn test_one_command_per_turn() {
        let mut rec = Recorder::default();
        let mut executor = Executor::new(diameters(2), &Silent);

        assert_eq!(executor.turn(&mut rec), Status::Running);
        assert_eq!(rec.calls.len(), 1);
        assert_eq!(executor.turn(&mut rec), Status::Running);
        assert_eq!(rec.calls.len(), 2);
        assert_eq!(executor.turn(&mut rec), Status::Drained);
        assert_eq!(executor.turn(&mut rec), Status::Drained);
        assert_eq!(rec.calls.len(), 2);
    }

    #[test]
    fn test_empty_queue_drains_immediately() {
        let mut rec = Recorder::default();
        let lines = RefCell::new(Vec::new());
        let observer = |m: &str| lines.borrow_mut().push(m.to_string());
        let mut executor = Executor::new(Vec::new(), &observer);

        assert_eq!(executor.run(&mut rec), Status::Drained);
        assert!(rec.calls.is_empty());
        let lines = lines.borrow();
        assert_eq!(lines[0], "Processing 0 commands...");
        assert!(lines[1].starts_with("Processing finished in "));
    }

    #[test]
    fn test_cancel_after_k_turns() {
        let total = 8;
        for k in 0..=total {
            let mut rec = Recorder::default();
            let mut polls = 0;
            let mut executor = Executor::new(diameters(total as u32), &Silent).with_cancel(move || {
                polls += 1;
                polls > k
            });

            let status = executor.run(&mut rec);

            assert_eq!(rec.calls.len(), k, "k = {}", k);
            assert_eq!(executor.state().remaining, total - k, "k = {}", k);
            let expected = if k == total { Status::Drained } else { Status::Stopped };
            assert_eq!(status, expected, "k = {}", k);
        }
    }

    #[test]
    fn test_stop_is_sticky_and_logged() {
        let mut rec = Recorder::default();
        let lines = RefCell::new(Vec::new());
        let observer = |m: &str| lines.borrow_mut().push(m.to_string());
        let mut executor = Executor::new(diameters(3), &observer).with_cancel(|| true);

        assert_eq!(executor.turn(&mut rec), Status::Stopped);
        assert_eq!(executor.turn(&mut rec), Status::Stopped);
        assert!(rec.calls.is_empty());
        assert_eq!(executor.state().remaining, 3);
        assert_eq!(lines.borrow().last().unwrap(), "Processing stopped.");
    }

    #[test]
    fn test_executes_draw_and_device_commands() {
        let mut rec = Recorder::default();
        let commands = vec![
            DrawCommand::Fill(Colour::WHITE),
            DrawCommand::SetColour(Colour::BLACK),
            DrawCommand::DrawPath(vec![Point::new(4.0, 4.0), Point::new(5.0, 4.0)]),
        ];
        Executor::new(commands, &Silent).run(&mut rec);

        assert_eq!(
            rec.calls,
            vec![
                "fill-tool",
                "colour #FFFFFF",
                "draw (0,0) (0,0)",
                "colour #000000",
                "draw (4,4) (5,4)",
            ]
        );
    }

    #[test]
    fn test_progress_gated_by_count_and_interval() {
        let mut rec = Recorder::default();
        let lines = RefCell::new(Vec::new());
        let observer = |m: &str| lines.borrow_mut().push(m.to_string());
        // 10ms per clock read: 50 commands take about 0.5s, under the interval.
        let clock = TickClock::new(Duration::from_millis(10));
        let mut executor = Executor::with_clock(diameters(500), clock, &observer);

        executor.run(&mut rec);

        let reports: Vec<String> = lines
            .borrow()
            .iter()
            .filter(|l| l.contains("% complete"))
            .cloned()
            .collect();
        // A report needs more than 2s since the last one: every 250 commands.
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("50.0% complete (250 commands remaining"));
    }

    #[test]
    fn test_eta_decreases_for_constant_cost() {
        let mut rec = Recorder::default();
        let lines = RefCell::new(Vec::new());
        let observer = |m: &str| lines.borrow_mut().push(m.to_string());
        let clock = TickClock::new(Duration::from_millis(100));
        let mut executor = Executor::with_clock(diameters(1000), clock, &observer);

        executor.run(&mut rec);

        let etas: Vec<f64> = lines
            .borrow()
            .iter()
            .filter_map(|l| {
                let start = l.find('~')? + 1;
                let end = l.find("s left")?;
                l[start..end].parse().ok()
            })
            .collect();

        assert!(etas.len() > 5);
        assert!(etas.windows(2).all(|w| w[1] <= w[0]), "{:?}", etas);
    }

    #[test]
    fn test_eta_estimate() {
        let state = ExecutionState {
            total: 100,
            remaining: 75,
            started: Duration::from_secs(10),
            last_report: Duration::from_secs(10),
        };
        // 25 done in 5s: 100 take 20s, 15s left.
        assert_eq!(state.eta(Duration::from_secs(15)), Some(Duration::from_secs(15)));

        let fresh = ExecutionState { remaining: 100, ..state };
        assert_eq!(fresh.eta(Duration::from_secs(15)), None);
    }
}
