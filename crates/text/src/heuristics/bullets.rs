/// Bullets shown in the README card.
pub const README_BULLETS: usize = 8;
/// Bullets shown in the expanded README view.
pub const EXPANDED_README_BULLETS: usize = 12;

const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Lines starting with `-`, `*` or `•`, markers stripped; markers with nothing
/// after them are dropped. Without any marker line the text is split into
/// sentences instead.
#[must_use]
pub fn extract_bullets(text: &str, limit: usize) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || limit == 0 {
        return Vec::new();
    }

    let marked: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(BULLET_MARKERS))
        .collect();
    if !marked.is_empty() {
        return marked
            .into_iter()
            .map(str::trim)
            .filter(|bullet| !bullet.is_empty())
            .take(limit)
            .map(str::to_string)
            .collect();
    }

    sentences(trimmed)
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Split after `.`, `!` or `?` when whitespace follows; the punctuation stays.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(_, next)) = chars.peek() else {
            continue;
        };
        if next.is_whitespace() {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}
