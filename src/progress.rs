//! Terminal feedback for `lyric-search` while the corpus is indexed.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// `250ms`, `1.5s`, `2.0m`.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

/// Ticking spinner labelled `label`. With `plain` set nothing is drawn and
/// the label goes to stderr once, for output that is piped or tailed.
pub fn indexing_spinner(label: &str, plain: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(label.to_string());
    if plain {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
        eprintln!("{}...", label);
        return spinner;
    }
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} ({elapsed})").unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
