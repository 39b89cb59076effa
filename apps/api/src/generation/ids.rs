//! Portfolio identifiers: `<filename-stem>-<millis>`.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

const FALLBACK_STEM: &str = "portfolio";

/// Opaque identifier addressing one stored portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortfolioId(String);

impl PortfolioId {
    pub fn for_upload(file_name: &str, suffix: i64) -> Self {
        PortfolioId(format!("{}-{suffix}", portfolio_id_stem(file_name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the readable part of an identifier from an uploaded filename.
///
/// `"John Doe Resume.pdf"` → `"john-doe-resume"`. Whitespace runs become a
/// single `-`; anything that is not `[a-z0-9._-]` is replaced by `-` so the
/// id can sit in a URL path unescaped.
pub fn portfolio_id_stem(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();
    let without_ext = match base.len().checked_sub(4) {
        Some(cut) if base.is_char_boundary(cut) && base[cut..].eq_ignore_ascii_case(".pdf") => {
            &base[..cut]
        }
        _ => base,
    };

    let lowered = without_ext.to_lowercase();
    let mut stem = String::with_capacity(lowered.len());
    for word in lowered.split_whitespace() {
        if !stem.is_empty() {
            stem.push('-');
        }
        stem.extend(word.chars().map(|c| match c {
            'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '-',
        }));
    }

    let stem = stem.trim_matches(|c| c == '-' || c == '.').to_string();
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// Hands out millisecond suffixes that strictly increase within the process,
/// even when two uploads land in the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn next_suffix(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }

    pub fn next_id(&self, file_name: &str) -> PortfolioId {
        PortfolioId::for_upload(file_name, self.next_suffix())
    }
}
