//! Global search over the in-memory catalog.

use regex::Regex;

use crate::catalog::Catalog;

pub const MIN_QUERY_CHARS: usize = 2;
pub const NOTHING_FOUND: &str = "Nothing found";

pub const MARK_OPEN: &str = "[";
pub const MARK_CLOSE: &str = "]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Book,
    Club,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: u32,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Query too short; the suggestion list stays closed.
    Hidden,
    NothingFound,
    Hits(Vec<SearchHit>),
}

/// Case-insensitive substring match on (title, author) of books and
/// (name, description) of clubs, books first.
pub fn search(catalog: &Catalog, query: &str) -> Suggestions {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Suggestions::Hidden;
    }

    let needle = query.to_lowercase();
    let matches = |title: &str, subtitle: &str| {
        title.to_lowercase().contains(&needle) || subtitle.to_lowercase().contains(&needle)
    };

    let books = catalog
        .books()
        .iter()
        .filter(|b| matches(&b.title, &b.author))
        .map(|b| SearchHit {
            kind: HitKind::Book,
            id: b.id,
            title: b.title.clone(),
            subtitle: b.author.clone(),
        });
    let clubs = catalog
        .clubs()
        .iter()
        .filter(|c| matches(&c.name, &c.description))
        .map(|c| SearchHit {
            kind: HitKind::Club,
            id: c.id,
            title: c.name.clone(),
            subtitle: c.description.clone(),
        });

    let hits: Vec<_> = books.chain(clubs).collect();
    if hits.is_empty() {
        Suggestions::NothingFound
    } else {
        Suggestions::Hits(hits)
    }
}

/// Wrap every case-insensitive occurrence of `query` in mark delimiters.
/// The query is matched literally, regex metacharacters included.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(query))) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(MARK_OPEN);
        out.push_str(m.as_str());
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
