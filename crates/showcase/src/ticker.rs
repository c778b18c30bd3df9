//! Timer that rotates the hero carousel.
//!
//! A [`CarouselTicker`] is a scheduled task owned by whoever renders the
//! carousel. It starts when created and is aborted either by
//! [`CarouselTicker::stop`] or when the ticker is dropped, so a torn-down
//! view can never be advanced by a stale timer.

use crate::carousel::Carousel;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Carousel state shared between the view and its ticker
pub type SharedCarousel = Arc<Mutex<Carousel>>;

/// Lock the shared carousel.
///
/// Carousel updates cannot leave it half-written, so a poisoned lock is
/// still safe to read.
pub fn lock_carousel(carousel: &SharedCarousel) -> MutexGuard<'_, Carousel> {
    carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Running carousel timer. Must be created inside a tokio runtime.
pub struct CarouselTicker {
    handle: Option<JoinHandle<()>>,
    ticks: watch::Receiver<usize>,
    period: Duration,
}

impl CarouselTicker {
    /// Advance `carousel` by one slide every `period`, first tick one
    /// period from now
    pub fn start(carousel: SharedCarousel, period: Duration) -> Self {
        let initial = lock_carousel(&carousel).index();
        let (tx, ticks) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let index = {
                    let mut guard = lock_carousel(&carousel);
                    guard.advance();
                    guard.index()
                };
                debug!(index, "Carousel advanced");
                // Nobody listening is fine; the carousel itself was updated
                let _ = tx.send(index);
            }
        });
        info!("Carousel ticker started ({:?} period)", period);

        Self {
            handle: Some(handle),
            ticks,
            period,
        }
    }

    /// Receiver that observes the carousel index after every tick
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.ticks.clone()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Carousel ticker stopped");
        }
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(6500);

    #[tokio::test(start_paused = true)]
    async fn test_ticker_advances_each_period() {
        let carousel: SharedCarousel = Arc::new(Mutex::new(Carousel::new(3)));
        let ticker = CarouselTicker::start(carousel.clone(), PERIOD);
        let mut ticks = ticker.subscribe();

        ticks.changed().await.unwrap();
        assert_eq!(*ticks.borrow_and_update(), 1);
        ticks.changed().await.unwrap();
        assert_eq!(*ticks.borrow_and_update(), 2);
        ticks.changed().await.unwrap();
        assert_eq!(*ticks.borrow_and_update(), 0);

        assert_eq!(lock_carousel(&carousel).index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_period() {
        let carousel: SharedCarousel = Arc::new(Mutex::new(Carousel::new(3)));
        let _ticker = CarouselTicker::start(carousel.clone(), PERIOD);

        time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert_eq!(lock_carousel(&carousel).index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_ticks() {
        let carousel: SharedCarousel = Arc::new(Mutex::new(Carousel::new(5)));
        let mut ticker = CarouselTicker::start(carousel.clone(), PERIOD);
        let mut ticks = ticker.subscribe();

        ticks.changed().await.unwrap();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());

        time::sleep(PERIOD * 4).await;
        assert_eq!(lock_carousel(&carousel).index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticks() {
        let carousel: SharedCarousel = Arc::new(Mutex::new(Carousel::new(5)));
        {
            let _ticker = CarouselTicker::start(carousel.clone(), PERIOD);
        }

        time::sleep(PERIOD * 4).await;
        assert_eq!(lock_carousel(&carousel).index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_moves_are_kept() {
        let carousel: SharedCarousel = Arc::new(Mutex::new(Carousel::new(5)));
        let ticker = CarouselTicker::start(carousel.clone(), PERIOD);
        let mut ticks = ticker.subscribe();

        lock_carousel(&carousel).go_to(3);
        ticks.changed().await.unwrap();
        assert_eq!(*ticks.borrow_and_update(), 4);
    }
}
