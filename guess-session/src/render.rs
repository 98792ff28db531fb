use guess_types::{EMPTY_HISTORY_PLACEHOLDER, SessionView};

/// Plain-text frame of the game screen.
pub fn render(view: &SessionView) -> String {
    let mut lines = Vec::new();

    for (index, notification) in view.notifications.iter().enumerate() {
        lines.push(match notification.detail() {
            Some(detail) => format!("[{}] {}: {}", index + 1, notification.title(), detail),
            None => format!("[{}] {}", index + 1, notification.title()),
        });
    }

    lines.push(format!("\n        {:>3}\n", view.current_result));
    lines.push(format!(
        "mode: {}  threshold: {}{}",
        view.mode,
        view.threshold,
        if view.cooling_down { "  (cooling down)" } else { "" }
    ));
    lines.push(format!("\n{:<10}{:<12}{}", "Time", "Guess", "Result"));

    if view.history.is_empty() {
        lines.push(EMPTY_HISTORY_PLACEHOLDER.to_string());
    }
    for entry in &view.history {
        lines.push(format!(
            "{:<10}{:<12}{} {}",
            entry.time,
            entry.guess_label(),
            entry.drawn_value,
            if entry.win { "won" } else { "lost" }
        ));
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}
