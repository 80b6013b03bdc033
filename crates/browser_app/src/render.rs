use browser_core::{AppViewModel, ErrorKind, RecordRowView, Segment};

pub const SERVER_UNAVAILABLE_TEXT: &str =
    "The server is under heavy load. Please wait a minute and try refreshing.";
pub const EMPTY_TEXT: &str = "No questions found.";

/// Renders the view model as plain text lines. Matched spans are wrapped in
/// square brackets.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 6);

    lines.push(format!(
        "Search: \"{}\" | Page size: {} | Types: {}",
        view.search_text,
        view.page_size,
        format_filters(view)
    ));

    if let Some(error) = view.error {
        lines.push(format!("! {}", error_text(error)));
    }
    if view.loading {
        lines.push("Loading data... Please wait".to_string());
    }

    if view.rows.is_empty() {
        lines.push(EMPTY_TEXT.to_string());
    } else {
        lines.extend(view.rows.iter().map(format_row));
    }

    lines.push(format!(
        "{} Page {} of {} ({} total) {}",
        if view.can_go_previous { "<prev" } else { "     " },
        view.page,
        view.last_page,
        view.total_count,
        if view.can_go_next { "next>" } else { "" }
    ));
    lines
}

fn error_text(error: ErrorKind) -> &'static str {
    match error {
        ErrorKind::ServerUnavailable => SERVER_UNAVAILABLE_TEXT,
    }
}

fn format_filters(view: &AppViewModel) -> String {
    view.categories
        .iter()
        .map(|option| {
            let mark = if option.selected { 'x' } else { ' ' };
            format!("[{mark}] {}", option.category.id())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_row(row: &RecordRowView) -> String {
    format!("  {:<12} {}", row.type_id, format_segments(&row.title))
}

pub fn format_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.is_match {
                format!("[{}]", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect()
}
