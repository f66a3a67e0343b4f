use std::collections::HashMap;

/// Turns a display name into an SVG element id.
///
/// Characters other than alphanumerics, `_` and `-` become `_`, and
/// leading or trailing underscores are trimmed. An empty result falls back
/// to `body`; a result starting with a digit, in any script, gets a `body_`
/// prefix.
#[must_use]
pub fn sanitize_id(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = replaced.trim_matches('_');
    match trimmed.chars().next() {
        None => "body".to_owned(),
        Some(first) if first.is_numeric() => format!("body_{trimmed}"),
        Some(_) => trimmed.to_owned(),
    }
}

/// Hands out unique ids within one document.
///
/// The first use of a base id is returned as-is; later uses get `_2`, `_3`,
/// and so on.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counts: HashMap<String, usize>,
}

impl IdAllocator {
    /// Creates an allocator with no ids handed out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id for `name`.
    pub fn id_for(&mut self, name: &str) -> String {
        let base = sanitize_id(name);
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}_{count}")
        }
    }
}
