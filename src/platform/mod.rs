//! Platform abstraction layer
//!
//! The host drives the simulation through [`TickLoop`]: a fixed-rate,
//! single-threaded repeating callback with an explicit cancellation handle.
//! The callback is the only suspension point; a cancelled loop is guaranteed
//! never to deliver another tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to stop a running [`TickLoop`]
///
/// Cloneable and thread-safe, so teardown can happen from inside the tick
/// callback or from another thread.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fixed-rate repeating tick driver
#[derive(Debug)]
pub struct TickLoop {
    period: Duration,
    cancelled: Arc<AtomicBool>,
}

impl TickLoop {
    /// A loop firing `tick_hz` times per second
    pub fn new(tick_hz: u32) -> Self {
        assert!(tick_hz > 0, "tick rate must be positive");
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(tick_hz)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for cancelling the loop; grab it before calling [`run`](Self::run)
    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Run `on_tick` once per period until cancelled.
    ///
    /// Cancellation is checked before every invocation, so `on_tick` never
    /// fires after the handle observes the cancel.
    pub fn run<F: FnMut()>(self, mut on_tick: F) {
        let mut next = Instant::now();
        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                log::debug!("tick loop cancelled");
                return;
            }
            on_tick();

            next += self.period;
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            } else {
                // Fell behind; resynchronize instead of spiralling
                next = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_from_callback_stops_exactly_there() {
        let tick_loop = TickLoop::new(10_000);
        let handle = tick_loop.handle();
        let mut count = 0u32;

        tick_loop.run(|| {
            count += 1;
            if count == 3 {
                handle.cancel();
            }
        });

        assert_eq!(count, 3);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn pre_cancelled_loop_never_ticks() {
        let tick_loop = TickLoop::new(10_000);
        tick_loop.handle().cancel();

        let mut count = 0u32;
        tick_loop.run(|| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn handles_are_shared() {
        let tick_loop = TickLoop::new(10_000);
        let a = tick_loop.handle();
        let b = tick_loop.handle();
        a.cancel();
        assert!(b.is_cancelled());
    }
}
