static PREVIEW_LENGTH: usize = 50;

/// Shortens a prompt for log lines.
pub fn preview(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(PREVIEW_LENGTH).collect();

    match chars.next() {
        Some(_) => format!("{}...", head),
        None => head,
    }
}
