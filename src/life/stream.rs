use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Generation, Life, Shared};
use crate::{get_config, LifeError, Result};

/// Channel for receiving streamed generations, buffered according to the
/// global config.
pub fn generation_channel() -> (mpsc::Sender<Generation>, mpsc::Receiver<Generation>) {
    mpsc::channel(get_config().listener_capacity)
}

/// Controls a running stream of generations.
///
/// Dropping the handle stops the stream as well.
pub struct StreamHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<Result<u64>>,
}

impl StreamHandle {
    /// Asks the stream to stop at the next tick boundary.
    ///
    /// A generation that is already being processed still completes and may
    /// still be delivered. Calling it again has no effect.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the stream and waits for it.
    ///
    /// Returns how many generations the stream processed, or the error that
    /// ended it early.
    pub async fn join(self) -> Result<u64> {
        self.stop();
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(LifeError::StreamAborted(e.to_string())),
        }
    }
}

impl Life {
    /// Starts processing generations on a background tokio task.
    ///
    /// Each tick calls [`Life::process`] and, when a `listener` is given,
    /// sends the resulting generation to it. A full listener blocks the
    /// stream until there is room again. Ticks happen every `interval`, or
    /// back to back when it is `None` or zero. The stream also ends when the
    /// listener is closed or processing fails.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        &self,
        listener: Option<mpsc::Sender<Generation>>,
        interval: Option<Duration>,
    ) -> StreamHandle {
        let (stop, stopped) = watch::channel(false);
        let shared = Arc::clone(&self.shared);
        let interval = interval.filter(|d| !d.is_zero());
        let task = tokio::spawn(run(shared, listener, interval, stopped));
        StreamHandle { stop, task }
    }
}

async fn run(
    shared: Arc<Shared>,
    listener: Option<mpsc::Sender<Generation>>,
    interval: Option<Duration>,
    mut stopped: watch::Receiver<bool>,
) -> Result<u64> {
    let mut ticker = interval.map(|period| {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });
    let mut processed = 0;

    loop {
        match ticker.as_mut() {
            Some(ticker) => {
                tokio::select! {
                    biased;
                    _ = stopped.changed() => break,
                    _ = ticker.tick() => {}
                }
            }
            None => tokio::task::yield_now().await,
        }
        // asked to stop, or the handle is gone
        if *stopped.borrow() || stopped.has_changed().is_err() {
            break;
        }

        // a full pass would stall the other tasks on this worker
        let step = Arc::clone(&shared);
        let generation = tokio::task::spawn_blocking(move || step.process())
            .await
            .map_err(|e| LifeError::StreamAborted(e.to_string()))??;
        processed += 1;

        if let Some(listener) = &listener {
            tokio::select! {
                biased;
                _ = stopped.changed() => break,
                sent = listener.send(generation) => {
                    if sent.is_err() {
                        break;
                    }
                }
            }
        }
    }
    Ok(processed)
}
