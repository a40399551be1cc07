//! Timer-driven frame analysis loop.
//!
//! [`FrameAnalyzer`] samples a [`FrameSource`] on a fixed interval while
//! armed and publishes the latest [`ShotAnalysis`] on a `watch` channel.
//! Arming and disarming are explicit: [`FrameAnalyzer::start`] spawns the
//! loop, [`AnalyzerHandle::stop`] cancels it, and no tick runs after stop.
//! A source with no frame ready skips the tick silently; consumers keep
//! seeing the previous result.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use roomreel_core::frame::FrameBuffer;
use roomreel_core::shot::{score_frame, ShotAnalysis, ShotConfig};

/// Default re-evaluation interval while the analyzer is armed.
pub const DEFAULT_ANALYSIS_INTERVAL: Duration = Duration::from_millis(200);

// ---------------------------------------------------------------------------
// FrameSource
// ---------------------------------------------------------------------------

/// A live video source the analyzer can capture frames from.
///
/// `capture` is called once per tick and returns `None` while no frame is
/// ready (source warming up, camera paused); that tick is skipped without
/// error.
pub trait FrameSource: Send + Sync {
    fn capture(&self) -> Option<FrameBuffer>;
}

// ---------------------------------------------------------------------------
// FrameAnalyzer
// ---------------------------------------------------------------------------

/// Periodic good-shot analyzer over a [`FrameSource`].
///
/// Built with defaults and customized via the `with_*` methods, then
/// consumed by [`start`](Self::start).
pub struct FrameAnalyzer {
    source: Arc<dyn FrameSource>,
    config: ShotConfig,
    interval: Duration,
    seed: Option<u64>,
}

impl FrameAnalyzer {
    /// Analyzer over `source` with the default config and interval.
    pub fn new(source: Arc<dyn FrameSource>) -> Self {
        Self {
            source,
            config: ShotConfig::default(),
            interval: DEFAULT_ANALYSIS_INTERVAL,
            seed: None,
        }
    }

    /// Override the scoring configuration.
    pub fn with_config(mut self, config: ShotConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Seed the jitter rng for deterministic results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Arm the analyzer: spawn the tick loop and return a handle for
    /// observing results and stopping it.
    ///
    /// The channel starts at [`ShotAnalysis::idle`] until the first
    /// successful capture.
    pub fn start(self) -> AnalyzerHandle {
        let (tx, rx) = watch::channel(ShotAnalysis::idle());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run(self, tx, cancel.clone()));

        AnalyzerHandle {
            results: rx,
            cancel,
            task,
        }
    }
}

/// The analyzer tick loop. Each tick runs to completion before the next
/// fires; cancellation wins the race against a pending tick.
async fn run(
    analyzer: FrameAnalyzer,
    tx: watch::Sender<ShotAnalysis>,
    cancel: CancellationToken,
) {
    let mut rng = match analyzer.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut interval = tokio::time::interval(analyzer.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Cancellation must win when both arms are ready, otherwise a
            // tick racing with stop() could still run once.
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Frame analyzer stopped");
                break;
            }
            _ = interval.tick() => {
                match analyzer.source.capture() {
                    Some(frame) => {
                        let result = score_frame(&frame, &analyzer.config, &mut rng);
                        // Receivers may all be gone; the loop keeps running
                        // until explicitly stopped.
                        let _ = tx.send(result);
                    }
                    // No frame ready: skip the tick, keep the last result.
                    None => tracing::trace!("No frame available, skipping analysis tick"),
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// AnalyzerHandle
// ---------------------------------------------------------------------------

/// Handle to a running analyzer.
pub struct AnalyzerHandle {
    results: watch::Receiver<ShotAnalysis>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl AnalyzerHandle {
    /// The most recently published analysis.
    pub fn latest(&self) -> ShotAnalysis {
        self.results.borrow().clone()
    }

    /// A receiver for awaiting new results (`changed()`).
    pub fn subscribe(&self) -> watch::Receiver<ShotAnalysis> {
        self.results.clone()
    }

    /// Disarm the analyzer. Cancellation is immediate: the loop exits
    /// before any further tick can run, and this waits for it to finish.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted source: returns frames from a fixed sequence, then repeats
    /// the final entry. Counts capture calls.
    struct ScriptedSource {
        script: Vec<Option<FrameBuffer>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<Option<FrameBuffer>>) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FrameSource for ScriptedSource {
        fn capture(&self) -> Option<FrameBuffer> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let idx = n.min(self.script.len() - 1);
            self.script[idx].clone()
        }
    }

    fn no_jitter() -> ShotConfig {
        ShotConfig {
            jitter: 0.0,
            ..ShotConfig::default()
        }
    }

    fn gray_frame() -> FrameBuffer {
        FrameBuffer::solid(32, 32, [128, 128, 128, 255]).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_result_each_interval() {
        let source = ScriptedSource::new(vec![Some(gray_frame())]);
        let handle = FrameAnalyzer::new(source.clone())
            .with_config(no_jitter())
            .start();

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        assert_eq!(handle.latest().confidence, 65.0);

        // Several more intervals elapse and the loop keeps capturing.
        tokio::time::sleep(Duration::from_millis(650)).await;
        assert!(source.calls() >= 3);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn starts_idle_before_first_capture() {
        // Source never produces a frame.
        let source = ScriptedSource::new(vec![None]);
        let handle = FrameAnalyzer::new(source.clone()).start();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(source.calls() >= 2, "ticks must still fire");
        assert_eq!(handle.latest(), ShotAnalysis::idle());

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn missing_frame_keeps_previous_result() {
        // One good frame, then the source goes dark.
        let source = ScriptedSource::new(vec![Some(gray_frame()), None]);
        let handle = FrameAnalyzer::new(source.clone())
            .with_config(no_jitter())
            .start();

        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        let first = handle.latest();
        assert_eq!(first.confidence, 65.0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(source.calls() >= 3);
        // No new value was published, the old one is still visible.
        assert!(!rx.has_changed().unwrap());
        assert_eq!(handle.latest(), first);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_runs_after_stop() {
        let source = ScriptedSource::new(vec![Some(gray_frame())]);
        let handle = FrameAnalyzer::new(source.clone())
            .with_config(no_jitter())
            .start();

        tokio::time::sleep(Duration::from_millis(250)).await;
        handle.stop().await;

        let calls_at_stop = source.calls();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.calls(), calls_at_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_tick_does_not_fire_once_cancelled() {
        let source = ScriptedSource::new(vec![Some(gray_frame())]);
        let handle = FrameAnalyzer::new(source.clone())
            .with_config(no_jitter())
            .start();

        // First tick fires immediately.
        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();
        let calls = source.calls();

        // Cancel, then make the next tick instant elapse so both select
        // arms are ready on the same poll. The cancel arm must win.
        handle.cancel.cancel();
        tokio::time::advance(Duration::from_millis(400)).await;
        tokio::task::yield_now().await;

        assert_eq!(source.calls(), calls);
        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn custom_interval_drives_tick_rate() {
        let source = ScriptedSource::new(vec![Some(gray_frame())]);
        let handle = FrameAnalyzer::new(source.clone())
            .with_config(no_jitter())
            .with_interval(Duration::from_secs(1))
            .start();

        // First tick fires immediately, then once per second.
        tokio::time::sleep(Duration::from_millis(3100)).await;
        let calls = source.calls();
        assert!(
            (3..=5).contains(&calls),
            "expected ~4 ticks at 1s interval, got {calls}"
        );

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_analyzers_agree() {
        let frame = FrameBuffer::solid(32, 32, [90, 90, 90, 255]).unwrap();
        let mut results = Vec::new();

        for _ in 0..2 {
            let source = ScriptedSource::new(vec![Some(frame.clone())]);
            let handle = FrameAnalyzer::new(source).with_seed(1234).start();
            let mut rx = handle.subscribe();
            rx.changed().await.unwrap();
            results.push(handle.latest());
            handle.stop().await;
        }

        assert_eq!(results[0], results[1]);
    }
}
