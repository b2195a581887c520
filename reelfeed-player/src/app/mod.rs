pub mod bootstrap;
pub mod session;

pub use bootstrap::AppConfig;
pub use session::{SessionReport, Transition, run_session};

/// Load catalog and script from `config` and run one session.
pub async fn run(config: &AppConfig) -> anyhow::Result<SessionReport> {
    let catalog = config.catalog()?;
    let script = config.script()?;
    log::info!(
        "mounting {} categor(ies) with config from {:?}; script spans {:?}",
        catalog.categories().len(),
        config.config_source,
        script.duration()
    );
    run_session(&catalog, &config.feed, &script).await
}

/// One line per transition, for the terminal.
pub fn render_transition(transition: &Transition) -> String {
    let status = &transition.status;
    let mut line = format!("[{:>8.3}s]", transition.at.as_secs_f64());
    let playing: Vec<&str> =
        status.playing.iter().map(|id| id.as_str()).collect();
    line.push_str(&format!(" playing=[{}]", playing.join(", ")));
    if status.scrolling {
        line.push_str(" scrolling");
    }
    line.push_str(if status.header_hidden {
        " header=hidden"
    } else {
        " header=shown"
    });
    if !status.mounted {
        line.push_str(" unmounted");
    }
    line
}
