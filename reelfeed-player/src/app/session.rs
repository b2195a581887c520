//! One mounted feed, driven by a scroll script in real (tokio) time.

use std::time::Duration;

use reelfeed_config::FeedConfig;
use reelfeed_core::{FeedScheduler, FeedStatus, ScrollSource, start_feed_driver};
use reelfeed_model::{Catalog, MediaId};
use tokio::time::{Instant, sleep};

use crate::layout::FeedLayout;
use crate::script::{ScrollScript, ScrollStep};
use crate::surface::{SimulatedSurface, VideoElement};

/// A published status that differs from the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Time since mount.
    pub at: Duration,
    pub status: FeedStatus,
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    pub transitions: Vec<Transition>,
    pub final_status: FeedStatus,
    /// Element state after unmount, in feed order.
    pub elements: Vec<VideoElement>,
    /// Scroll events that reached the driver.
    pub scroll_events: usize,
}

impl SessionReport {
    pub fn element(&self, id: &str) -> Option<&VideoElement> {
        self.elements.iter().find(|el| el.id.as_str() == id)
    }

    /// Every distinct playing set, in the order it appeared.
    pub fn playing_history(&self) -> Vec<Vec<MediaId>> {
        let mut history: Vec<Vec<MediaId>> = Vec::new();
        for transition in &self.transitions {
            if history.last() != Some(&transition.status.playing) {
                history.push(transition.status.playing.clone());
            }
        }
        history
    }
}

/// Mount `catalog`, replay `script` through the feed driver, then unmount.
pub async fn run_session(
    catalog: &Catalog,
    config: &FeedConfig,
    script: &ScrollScript,
) -> anyhow::Result<SessionReport> {
    let layout = FeedLayout::new(catalog, config.layout);
    let surface = SimulatedSurface::new(catalog, layout);

    let mut scheduler =
        FeedScheduler::new(surface.clone(), config.scheduler_settings());
    scheduler.mount(catalog);

    let started = Instant::now();
    let (handle, join) = start_feed_driver(scheduler);
    let mut status_rx = handle.subscribe();
    let watcher = tokio::spawn(async move {
        let mut transitions = vec![Transition {
            at: Duration::ZERO,
            status: status_rx.borrow_and_update().clone(),
        }];
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone();
            if transitions.last().is_some_and(|last| last.status != status) {
                transitions.push(Transition {
                    at: started.elapsed(),
                    status,
                });
            }
        }
        transitions
    });

    let mut scroll_events = 0;
    for step in script.iter() {
        match step {
            ScrollStep::Feed { feed } => {
                if surface.scroll_feed(*feed) {
                    handle.scroll(ScrollSource::Feed)?;
                    scroll_events += 1;
                }
            }
            ScrollStep::Row { row, dx } => {
                match surface.scroll_row(row.as_str(), *dx) {
                    Some(true) => {
                        handle.scroll(ScrollSource::Row(row.clone()))?;
                        scroll_events += 1;
                    }
                    Some(false) => {}
                    None => log::warn!("script scrolls unknown row '{row}'"),
                }
            }
            ScrollStep::Wait { wait_ms } => {
                sleep(Duration::from_millis(*wait_ms)).await;
                surface.advance(*wait_ms);
            }
        }
    }

    handle.unmount()?;
    let scheduler = join.await?;
    let transitions = watcher.await?;
    log::debug!(
        "session finished after {} burst(s) and {} settle(s)",
        scheduler.bursts(),
        scheduler.settles()
    );

    let final_status = handle.status();
    let elements = catalog
        .clips()
        .filter_map(|clip| surface.element(clip.id.as_str()))
        .collect();

    Ok(SessionReport {
        transitions,
        final_status,
        elements,
        scroll_events,
    })
}
