//! Async driver for a [`FeedScheduler`].
//!
//! Owns the scheduler inside a single tokio task. Scroll events arrive over
//! an unbounded channel and the settle timer is a `sleep_until` raced
//! against the next event, so a scroll before the deadline simply re-arms
//! it. All scheduler logic still runs on one logical thread.

use std::future;

use reelfeed_model::MediaId;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use super::scheduler::{FeedScheduler, ScrollSource, SettleOutcome};
use super::surface::MediaSurface;
use crate::error::DriverError;

#[derive(Debug)]
enum FeedCommand {
    Scroll(ScrollSource),
    Settle,
    Unmount,
}

/// Snapshot of scheduler state published after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedStatus {
    /// Clips the scheduler last told to play.
    pub playing: Vec<MediaId>,
    /// A burst is in progress and its settle has not run yet.
    pub scrolling: bool,
    pub header_hidden: bool,
    /// Scroll bursts seen since the driver started.
    pub bursts: u64,
    /// Settles run since the driver started.
    pub settles: u64,
    /// False once the feed has been unmounted.
    pub mounted: bool,
}

impl FeedStatus {
    fn capture<S: MediaSurface>(scheduler: &FeedScheduler<S>) -> Self {
        Self {
            playing: scheduler.playing().to_vec(),
            scrolling: scheduler.is_scrolling(),
            header_hidden: scheduler.header_hidden(),
            bursts: scheduler.bursts(),
            settles: scheduler.settles(),
            mounted: true,
        }
    }
}

/// Handle to send scroll events to the driver.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    tx: mpsc::UnboundedSender<FeedCommand>,
    status: watch::Receiver<FeedStatus>,
}

impl FeedHandle {
    /// Report a scroll event from `source`.
    pub fn scroll(&self, source: ScrollSource) -> Result<(), DriverError> {
        self.send(FeedCommand::Scroll(source))
    }

    /// Settle immediately instead of waiting for the quiet period.
    pub fn settle_now(&self) -> Result<(), DriverError> {
        self.send(FeedCommand::Settle)
    }

    /// Pause playback and stop the driver.
    pub fn unmount(&self) -> Result<(), DriverError> {
        self.send(FeedCommand::Unmount)
    }

    /// Latest published status.
    pub fn status(&self) -> FeedStatus {
        self.status.borrow().clone()
    }

    /// Receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<FeedStatus> {
        self.status.clone()
    }

    /// True once the driver task has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(&self, command: FeedCommand) -> Result<(), DriverError> {
        self.tx.send(command).map_err(|_| DriverError::Closed)
    }
}

/// Start the driver task. The task ends on [`FeedHandle::unmount`] or once
/// every handle has been dropped, and hands the scheduler back.
pub fn start_feed_driver<S>(
    mut scheduler: FeedScheduler<S>,
) -> (FeedHandle, JoinHandle<FeedScheduler<S>>)
where
    S: MediaSurface + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<FeedCommand>();
    let (status_tx, status_rx) =
        watch::channel(FeedStatus::capture(&scheduler));
    let handle = FeedHandle {
        tx,
        status: status_rx,
    };

    let join = tokio::spawn(async move {
        loop {
            let deadline = scheduler.settle_deadline();
            tokio::select! {
                // Queued scrolls re-arm the timer before an expired deadline
                // gets a chance to settle.
                biased;
                command = rx.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        FeedCommand::Scroll(source) => {
                            let reaction = scheduler
                                .on_scroll(&source, Instant::now().into_std());
                            if let Some(hidden) = reaction.header_hidden {
                                log::trace!("header hidden={hidden}");
                            }
                        }
                        FeedCommand::Settle => {
                            let outcome = scheduler.settle();
                            log_outcome(&outcome);
                        }
                        FeedCommand::Unmount => {
                            scheduler.unmount();
                            let mut status = FeedStatus::capture(&scheduler);
                            status.mounted = false;
                            status_tx.send_replace(status);
                            break;
                        }
                    }
                }
                _ = wait_for(deadline) => {
                    if let Some(outcome) =
                        scheduler.poll_settle(Instant::now().into_std())
                    {
                        log_outcome(&outcome);
                    }
                }
            }
            status_tx.send_replace(FeedStatus::capture(&scheduler));
        }
        log::debug!("feed driver stopped");
        scheduler
    });

    (handle, join)
}

async fn wait_for(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => sleep_until(Instant::from_std(deadline)).await,
        None => future::pending::<()>().await,
    }
}

fn log_outcome(outcome: &SettleOutcome) {
    match outcome {
        SettleOutcome::Reconciled { stopped, playing } => {
            log::trace!("reconciled: stopped {stopped:?}, playing {playing:?}")
        }
        SettleOutcome::Resumed { playing } => {
            log::trace!("nothing in view; resumed {playing:?}")
        }
    }
}
