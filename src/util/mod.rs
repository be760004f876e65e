use crate::models::Note;

const TITLE_MAX_CHARS: usize = 45;
const PREVIEW_MAX_CHARS: usize = 45;

fn take_chars(s: &str, max: usize) -> (&str, bool) {
    match s.char_indices().nth(max) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

/// First line of the body, capped at 45 characters.
pub(crate) fn note_title(note: &Note) -> String {
    let body = note.body.as_deref().unwrap_or_default();
    let first = body.lines().next().unwrap_or_default();
    take_chars(first, TITLE_MAX_CHARS).0.to_string()
}

/// Everything after the first line on one line, capped at 45 characters plus `...`.
pub(crate) fn note_preview(note: &Note) -> String {
    let body = note.body.as_deref().unwrap_or_default();
    let rest = body.split_once('\n').map(|(_, rest)| rest).unwrap_or_default();
    let flat = rest.split_whitespace().collect::<Vec<_>>().join(" ");

    match take_chars(&flat, PREVIEW_MAX_CHARS) {
        (head, true) => format!("{head}..."),
        (head, false) => head.to_string(),
    }
}

/// Date part of the server's `updated` timestamp (`2024-03-01T10:00:00Z` -> `2024-03-01`).
pub(crate) fn note_updated_date(note: &Note) -> Option<String> {
    let updated = note.updated()?;
    let date = updated.split('T').next().unwrap_or(updated);
    Some(date.to_string())
}

/// Editor route for a note, with the id percent-encoded like the API paths.
pub(crate) fn note_href(note: &Note) -> String {
    format!("/note/{}", urlencoding::encode(&note.id.to_string()))
}
