mod common;

use std::time::Duration;

use common::{ABOVE, HIT, StubSurface, ids, pause, play, seek};
use reelfeed_core::{
    DriverError, FeedScheduler, ScrollSource, start_feed_driver,
};
use tokio::time::sleep;

fn mounted() -> (FeedScheduler<StubSurface>, StubSurface) {
    let surface = StubSurface::with_elements(&[
        ("v1", HIT),
        ("v2", HIT),
        ("v3", ABOVE),
    ]);
    let mut scheduler = FeedScheduler::with_defaults(surface.clone());
    scheduler.bootstrap(&ids(&["v1", "v2"]));
    surface.recorder.take();
    (scheduler, surface)
}

#[tokio::test(start_paused = true)]
async fn rapid_scrolls_coalesce_into_one_settle() {
    let (scheduler, surface) = mounted();
    let (handle, join) = start_feed_driver(scheduler);

    for _ in 0..8 {
        handle.scroll(ScrollSource::Feed).unwrap();
        sleep(Duration::from_millis(50)).await;
    }
    surface.set_elements(&[("v1", ABOVE), ("v2", ABOVE), ("v3", HIT)]);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(handle.status().settles, 0);
    assert!(handle.status().scrolling);

    sleep(Duration::from_millis(400)).await;
    let status = handle.status();
    assert_eq!(status.settles, 1);
    assert_eq!(status.bursts, 1);
    assert!(!status.scrolling);
    assert_eq!(status.playing, ids(&["v3"]));
    assert_eq!(
        surface.recorder.ops(),
        vec![
            pause("v1"),
            pause("v2"),
            pause("v1"),
            seek("v1"),
            pause("v2"),
            seek("v2"),
            play("v3"),
        ]
    );

    drop(handle);
    let scheduler = join.await.unwrap();
    assert_eq!(scheduler.settles(), 1);
}

#[tokio::test(start_paused = true)]
async fn separate_bursts_pause_and_settle_each_time() {
    let (scheduler, surface) = mounted();
    let (handle, _join) = start_feed_driver(scheduler);

    handle.scroll(ScrollSource::Feed).unwrap();
    sleep(Duration::from_millis(600)).await;
    handle.scroll(ScrollSource::Row("hot".into())).unwrap();
    sleep(Duration::from_millis(600)).await;

    let status = handle.status();
    assert_eq!(status.bursts, 2);
    assert_eq!(status.settles, 2);
    assert_eq!(status.playing, ids(&["v1", "v2"]));
    let pauses = surface
        .recorder
        .ops()
        .into_iter()
        .filter(|op| matches!(op, common::Op::Pause(_)))
        .count();
    assert_eq!(pauses, 4);
}

#[tokio::test(start_paused = true)]
async fn settle_now_skips_the_quiet_period() {
    let (scheduler, surface) = mounted();
    let (handle, _join) = start_feed_driver(scheduler);

    handle.scroll(ScrollSource::Feed).unwrap();
    surface.set_elements(&[("v1", ABOVE), ("v2", HIT), ("v3", ABOVE)]);
    handle.settle_now().unwrap();
    sleep(Duration::from_millis(10)).await;

    let status = handle.status();
    assert_eq!(status.settles, 1);
    assert_eq!(status.playing, ids(&["v2"]));

    // The cancelled deadline must not fire a second settle later.
    sleep(Duration::from_secs(1)).await;
    assert_eq!(handle.status().settles, 1);
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_the_driver() {
    let (scheduler, surface) = mounted();
    let (handle, join) = start_feed_driver(scheduler);
    let mut status = handle.subscribe();

    handle.scroll(ScrollSource::Feed).unwrap();
    handle.unmount().unwrap();
    let scheduler = join.await.unwrap();

    status.changed().await.ok();
    assert!(!status.borrow().mounted);
    assert_eq!(scheduler.settles(), 0);
    assert_eq!(
        surface.recorder.ops(),
        vec![pause("v1"), pause("v2"), pause("v1"), pause("v2")]
    );
    assert_eq!(
        handle.scroll(ScrollSource::Feed),
        Err(DriverError::Closed)
    );
}

#[tokio::test(start_paused = true)]
async fn queued_scroll_rearms_an_expired_deadline() {
    let (scheduler, _surface) = mounted();
    let (handle, _join) = start_feed_driver(scheduler);

    handle.scroll(ScrollSource::Feed).unwrap();
    sleep(Duration::from_millis(10)).await;

    // The deadline passes while a second scroll is still queued.
    handle.scroll(ScrollSource::Feed).unwrap();
    tokio::time::advance(Duration::from_millis(600)).await;
    sleep(Duration::from_millis(1)).await;

    let status = handle.status();
    assert_eq!(status.settles, 0);
    assert_eq!(status.bursts, 1);
    assert!(status.scrolling);

    sleep(Duration::from_millis(600)).await;
    let status = handle.status();
    assert_eq!(status.settles, 1);
    assert_eq!(status.bursts, 1);
}
