use reelfeed_config::FeedConfig;
use reelfeed_model::media_ids;
use reelfeed_player::app::run_session;
use reelfeed_player::catalog::demo_catalog;
use reelfeed_player::script::{ScrollScript, ScrollStep};

#[tokio::test(start_paused = true)]
async fn demo_session_follows_the_activation_line() {
    let report = run_session(
        &demo_catalog(),
        &FeedConfig::default(),
        &ScrollScript::demo(),
    )
    .await
    .unwrap();

    assert_eq!(
        report.playing_history(),
        vec![
            media_ids(["hot-1", "hot-2"]),
            media_ids(["live-1", "live-2"]),
            media_ids(["live-2", "live-3"]),
            media_ids(["hot-1", "hot-2"]),
        ]
    );
    assert!(!report.final_status.mounted);
    assert_eq!(report.final_status.bursts, 3);
    assert_eq!(report.final_status.settles, 3);

    // Rewound when the feed left it, played again on the way back up.
    let hot_1 = report.element("hot-1").unwrap();
    assert_eq!(hot_1.rewinds, 1);
    assert!(hot_1.position_ms > 0);
    assert!(!hot_1.playing);
    // The sideways swipe kept live-2 playing; only the final scroll rewound it.
    assert_eq!(report.element("live-2").unwrap().rewinds, 1);
    assert_eq!(report.element("live-1").unwrap().rewinds, 1);
    assert_eq!(report.element("rec-1").unwrap().plays, 0);
}

#[tokio::test(start_paused = true)]
async fn quick_flicks_coalesce_into_one_burst() {
    let script = ScrollScript::new(vec![
        ScrollStep::feed(30.0),
        ScrollStep::wait(100),
        ScrollStep::feed(30.0),
        ScrollStep::wait(100),
        ScrollStep::feed(30.0),
        ScrollStep::wait(600),
    ]);

    let report =
        run_session(&demo_catalog(), &FeedConfig::default(), &script)
            .await
            .unwrap();

    assert_eq!(report.scroll_events, 3);
    assert_eq!(report.final_status.bursts, 1);
    assert_eq!(report.final_status.settles, 1);
    // Still straddling the line after 90px, so the clips just resume.
    assert_eq!(report.final_status.playing, media_ids(["hot-1", "hot-2"]));
    assert_eq!(report.element("hot-1").unwrap().rewinds, 0);
}

#[tokio::test(start_paused = true)]
async fn resting_between_rows_resumes_the_previous_clips() {
    // 150px puts the gap between the first two rows on the line.
    let script = ScrollScript::new(vec![
        ScrollStep::feed(150.0),
        ScrollStep::wait(600),
    ]);

    let report =
        run_session(&demo_catalog(), &FeedConfig::default(), &script)
            .await
            .unwrap();

    assert_eq!(report.final_status.playing, media_ids(["hot-1", "hot-2"]));
    let hot_1 = report.element("hot-1").unwrap();
    assert_eq!(hot_1.rewinds, 0);
    assert_eq!(hot_1.pauses, 2);
}

#[tokio::test(start_paused = true)]
async fn scrolls_past_the_edge_send_no_events() {
    let script = ScrollScript::new(vec![
        ScrollStep::feed(-100.0),
        ScrollStep::row("hot", -50.0),
        ScrollStep::row("missing", 40.0),
        ScrollStep::wait(600),
    ]);

    let report =
        run_session(&demo_catalog(), &FeedConfig::default(), &script)
            .await
            .unwrap();

    assert_eq!(report.scroll_events, 0);
    assert_eq!(report.final_status.bursts, 0);
    assert_eq!(report.playing_history(), vec![media_ids(["hot-1", "hot-2"])]);
}

#[tokio::test(start_paused = true)]
async fn header_hides_on_the_way_down_and_returns_on_the_way_up() {
    let script = ScrollScript::new(vec![
        ScrollStep::feed(80.0),
        ScrollStep::wait(16),
        ScrollStep::feed(40.0),
        ScrollStep::wait(16),
        ScrollStep::feed(-20.0),
        ScrollStep::wait(600),
    ]);

    let report =
        run_session(&demo_catalog(), &FeedConfig::default(), &script)
            .await
            .unwrap();

    let header: Vec<bool> = report
        .transitions
        .iter()
        .map(|t| t.status.header_hidden)
        .collect();
    assert!(header.contains(&true));
    assert!(!report.final_status.header_hidden);
}
