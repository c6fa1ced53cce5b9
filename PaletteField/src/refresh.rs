//! Source refresh - debounced refetch of filter choices when a field's
//! color source changes
//!
//! Source changes arrive as one event stream. Bursts are coalesced by a
//! [`Debouncer`] driven by caller-supplied instants, so the model never
//! sleeps or owns a timer; the host calls [`FilterEditor::tick`] from its
//! own event loop.

use std::time::{Duration, Instant};

use themepalette::filter::{FilterMode, FilterPolicy};
use themepalette::theme::PaletteProvider;

use crate::field::ColorChoice;
use crate::query::{Caller, ColorList, ColorQuery, ColorQueryEndpoint, QueryError};

/// Quiet period after the last event before it is acted on
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Keeps only the latest event of a burst and releases it once the stream
/// has been quiet for the window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an event; replaces any pending one and restarts the window
    pub fn push(&mut self, event: T, at: Instant) {
        self.pending = Some((event, at));
    }

    /// Take the pending event if the window has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.window => {
                self.pending.take().map(|(event, _)| event)
            }
            _ => None,
        }
    }

    /// Take the pending event regardless of the window
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(event, _)| event)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// State of a field's include/exclude settings while it is being edited
#[derive(Debug, Clone)]
pub struct FilterEditor {
    mode: FilterMode,
    choices: Vec<ColorChoice>,
    excluded: Vec<String>,
    included: Vec<String>,
    nonce: Option<String>,
    source_changes: Debouncer<String>,
}

impl FilterEditor {
    /// Editor showing `choices`, with nothing selected
    #[must_use]
    pub fn new(mode: FilterMode, choices: Vec<ColorChoice>) -> Self {
        Self {
            mode,
            choices,
            excluded: Vec::new(),
            included: Vec::new(),
            nonce: None,
            source_changes: Debouncer::default(),
        }
    }

    /// Attach the nonce sent with every refetch
    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Use a different debounce window
    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.source_changes = Debouncer::new(window);
        self
    }

    pub fn choices(&self) -> &[ColorChoice] {
        &self.choices
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Select slugs to exclude; slugs not among the choices are dropped
    pub fn set_excluded<I: IntoIterator<Item = String>>(&mut self, slugs: I) {
        self.excluded = self.known(slugs);
    }

    /// Select slugs to include; slugs not among the choices are dropped
    pub fn set_included<I: IntoIterator<Item = String>>(&mut self, slugs: I) {
        self.included = self.known(slugs);
    }

    fn known<I: IntoIterator<Item = String>>(&self, slugs: I) -> Vec<String> {
        slugs
            .into_iter()
            .filter(|slug| self.choices.iter().any(|c| &c.id == slug))
            .collect()
    }

    /// Policy described by the current selections
    #[must_use]
    pub fn policy(&self) -> FilterPolicy {
        FilterPolicy {
            mode: self.mode,
            exclude_slugs: self.excluded.iter().cloned().collect(),
            include_slugs: self.included.iter().cloned().collect(),
        }
    }

    /// Record that the color source setting changed
    pub fn source_changed(&mut self, source: impl Into<String>, at: Instant) {
        self.source_changes.push(source.into(), at);
    }

    /// Whether a source change is waiting to settle
    #[must_use]
    pub fn is_refresh_pending(&self) -> bool {
        self.source_changes.is_pending()
    }

    /// Refetch choices if a source change has settled at `now`.
    ///
    /// Returns `Ok(true)` when the choices were replaced. A rejected query
    /// leaves the editor as it was.
    pub fn tick<P: PaletteProvider>(
        &mut self,
        now: Instant,
        endpoint: &ColorQueryEndpoint<P>,
        caller: &impl Caller,
    ) -> Result<bool, QueryError> {
        let Some(source) = self.source_changes.poll(now) else {
            return Ok(false);
        };

        let mut request = ColorQuery::for_source(source);
        request.nonce.clone_from(&self.nonce);

        let list = endpoint.query(caller, &request)?;
        self.apply(list);
        Ok(true)
    }

    /// Replace the choices and clear both selections
    pub fn apply(&mut self, list: ColorList) {
        tracing::debug!("Replacing {} filter choices with {}", self.choices.len(), list.colors.len());
        self.choices = list.colors;
        self.excluded.clear();
        self.included.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themepalette::theme::ThemeDocument;

    struct Editor;

    impl Caller for Editor {
        fn can_edit_posts(&self) -> bool {
            true
        }
        fn verify_nonce(&self, nonce: &str) -> bool {
            nonce == "n0nce"
        }
    }

    fn endpoint() -> ColorQueryEndpoint<ThemeDocument> {
        ColorQueryEndpoint::new(
            ThemeDocument::parse(
                r##"{
                    "settings": { "color": { "palette": [
                        { "name": "Primary", "slug": "primary", "color": "#FF0000" },
                        { "name": "Black", "slug": "black", "color": "#000000" }
                    ]}},
                    "custom": { "color": { "accent-100": "#00FF00" } }
                }"##,
            )
            .unwrap(),
        )
    }

    fn ids(editor: &FilterEditor) -> Vec<&str> {
        editor.choices().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_debouncer_releases_last_event_after_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.push("custom", start);
        debouncer.push("both", start + Duration::from_millis(150));

        assert_eq!(debouncer.poll(start + Duration::from_millis(200)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), Some("both"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_debouncer_flush() {
        let mut debouncer = Debouncer::default();
        debouncer.push(1, Instant::now());
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_source_change_refetches_and_clears_selection() {
        let endpoint = endpoint();
        let initial = endpoint.query(&Editor, &ColorQuery::default()).unwrap();
        let mut editor = FilterEditor::new(FilterMode::Exclude, initial.colors).with_nonce("n0nce");
        editor.set_excluded(["black".to_string(), "unknown".to_string()]);
        assert_eq!(editor.excluded(), ["black"]);

        let start = Instant::now();
        editor.source_changed("both", start);
        editor.source_changed("custom", start + Duration::from_millis(50));

        assert!(!editor.tick(start + Duration::from_millis(100), &endpoint, &Editor).unwrap());
        assert_eq!(ids(&editor), ["primary", "black"]);

        assert!(editor.tick(start + Duration::from_millis(250), &endpoint, &Editor).unwrap());
        assert_eq!(ids(&editor), ["accent-100"]);
        assert!(editor.excluded().is_empty());
        assert!(editor.included().is_empty());
        assert!(!editor.is_refresh_pending());
    }

    #[test]
    fn test_rejected_refetch_keeps_state() {
        let endpoint = endpoint();
        let initial = endpoint.query(&Editor, &ColorQuery::default()).unwrap();
        let mut editor =
            FilterEditor::new(FilterMode::Include, initial.colors).with_debounce(Duration::ZERO);
        editor.set_included(["primary".to_string()]);

        let now = Instant::now();
        editor.source_changed("everything", now);
        assert_eq!(
            editor.tick(now, &endpoint, &Editor),
            Err(QueryError::InvalidSource("everything".into()))
        );
        assert_eq!(editor.included(), ["primary"]);
        assert_eq!(editor.policy(), FilterPolicy::include(["primary"]));
    }
}
