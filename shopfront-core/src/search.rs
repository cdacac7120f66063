//! In-page product search.
//!
//! The index is built once from the cards present at start-up. Queries are
//! scored by case-insensitive substring matches:
//!
//! | field                  | points |
//! |------------------------|--------|
//! | title                  | 3      |
//! | tags                   | 2      |
//! | description *or* alt   | 1      |
//!
//! Zero-score entries are dropped; the rest are ranked by score, then title.
use crate::constants::{SCORE_DETAIL, SCORE_TAGS, SCORE_TITLE};
use crate::product::ProductCard;
use smallvec::SmallVec;

/// Searchable record for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    /// Position of the card in document order.
    pub card_index: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub alt: String,
    pub tags: String,
    /// Lowercased `title description alt tags`.
    pub haystack: String,
    title_lc: String,
    description_lc: String,
    alt_lc: String,
    tags_lc: String,
}

impl SearchEntry {
    #[must_use]
    pub fn from_card(card_index: usize, card: &ProductCard) -> Self {
        let field = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };
        let title = field(&card.title);
        let description = field(&card.description);
        let alt = field(&card.alt);
        let tags = field(&card.tags);
        let haystack = [
            title.as_str(),
            description.as_str(),
            alt.as_str(),
            tags.as_str(),
        ]
        .join(" ")
        .to_lowercase();
        Self {
            card_index,
            id: card.id(),
            title_lc: title.to_lowercase(),
            description_lc: description.to_lowercase(),
            alt_lc: alt.to_lowercase(),
            tags_lc: tags.to_lowercase(),
            title,
            description,
            alt,
            tags,
            haystack,
        }
    }
}

/// Score an entry against a query (already trimmed or not).
#[must_use]
pub fn score(query: &str, entry: &SearchEntry) -> u32 {
    let needle = query.trim().to_lowercase();
    score_lowered(&needle, entry)
}

fn score_lowered(needle: &str, entry: &SearchEntry) -> u32 {
    let mut points = 0;
    if entry.title_lc.contains(needle) {
        points += SCORE_TITLE;
    }
    if entry.tags_lc.contains(needle) {
        points += SCORE_TAGS;
    }
    if entry.description_lc.contains(needle) || entry.alt_lc.contains(needle) {
        points += SCORE_DETAIL;
    }
    points
}

/// A ranked match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a SearchEntry,
    pub score: u32,
}

pub type SearchHits<'a> = SmallVec<[SearchHit<'a>; 6]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    max_results: usize,
}

impl SearchIndex {
    #[must_use]
    pub fn new(entries: Vec<SearchEntry>, max_results: usize) -> Self {
        Self {
            entries,
            max_results,
        }
    }

    /// Index cards in document order.
    #[must_use]
    pub fn from_cards(cards: &[ProductCard], max_results: usize) -> Self {
        let entries = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| SearchEntry::from_card(idx, card))
            .collect();
        Self::new(entries, max_results)
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked matches for a query; blank queries match nothing.
    #[must_use]
    pub fn results_for(&self, query: &str) -> SearchHits<'_> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchHits::new();
        }
        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                entry,
                score: score_lowered(&needle, entry),
            })
            .filter(|hit| hit.score > 0)
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.entry.title_lc.cmp(&b.entry.title_lc))
                .then_with(|| a.entry.title.cmp(&b.entry.title))
        });
        hits.into_iter().take(self.max_results).collect()
    }

    /// Id of the best match, if any.
    #[must_use]
    pub fn top_match(&self, query: &str) -> Option<&str> {
        self.results_for(query)
            .first()
            .map(|hit| hit.entry)
            .map(|entry| entry.id.as_str())
    }
}

/// A suggestion button in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
}

/// What the suggestion panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Suggestions(Vec<Suggestion>),
    NoMatches,
}

impl PanelState {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl SearchIndex {
    /// Panel contents after the (debounced) query settles.
    #[must_use]
    pub fn panel_for_input(&self, query: &str) -> PanelState {
        if query.trim().is_empty() {
            return PanelState::Hidden;
        }
        self.panel_for_hits(&self.results_for(query))
    }

    fn panel_for_hits(&self, hits: &[SearchHit<'_>]) -> PanelState {
        if hits.is_empty() {
            return PanelState::NoMatches;
        }
        PanelState::Suggestions(
            hits.iter()
                .map(|hit| Suggestion {
                    id: hit.entry.id.clone(),
                    title: hit.entry.title.clone(),
                })
                .collect(),
        )
    }

    /// Outcome of submitting the search form.
    #[must_use]
    pub fn submit(&self, query: &str) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.top_match(query)
            .map_or(SubmitOutcome::NoMatches, |id| {
                SubmitOutcome::Navigate(id.to_string())
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query.
    Ignored,
    /// Scroll to and highlight this card id.
    Navigate(String),
    /// Show the explicit "no matches" panel.
    NoMatches,
}

/// Trailing-edge debounce over a value, driven by an explicit clock.
///
/// Each [`Debouncer::push`] replaces the pending value and pushes the
/// deadline out; [`Debouncer::poll`] releases the value once it is due.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Queue a value, cancelling whatever was pending. Returns its deadline.
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        let due = now_ms.saturating_add(self.delay_ms);
        self.pending = Some((due, value));
        due
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending.take() {
            Some((due, value)) if due <= now_ms => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
