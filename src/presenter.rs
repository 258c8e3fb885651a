//! List presenter.
//!
//! Owns the ordered list of records backing a view and turns row
//! selections into a dismissible overlay.

use std::time::Duration;

use tracing::{debug, warn};

use crate::models::Mountain;

/// Label of the overlay's dismiss action.
pub const DISMISS_LABEL: &str = "Dismiss";

/// How long an overlay stays up without user action.
///
/// Long enough that it is effectively dismissed by hand only.
pub const OVERLAY_DURATION: Duration = Duration::from_millis(999_999);

/// Transient text surface shown after a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Summary of the selected record.
    pub text: String,
    /// Label of the action that dismisses the overlay.
    pub action: &'static str,
    /// Auto-dismiss timeout.
    pub duration: Duration,
}

impl Overlay {
    fn for_mountain(mountain: &Mountain) -> Self {
        Self {
            text: mountain.summary(),
            action: DISMISS_LABEL,
            duration: OVERLAY_DURATION,
        }
    }
}

/// Rendering surface driven by a [`Presenter`].
pub trait View {
    /// Redraw the list after the backing records changed.
    fn refresh(&mut self, items: &[Mountain]);

    /// Show an overlay, replacing any visible one.
    fn show_overlay(&mut self, overlay: &Overlay);

    /// Hide the visible overlay.
    fn hide_overlay(&mut self);
}

/// Owner of the displayed records.
///
/// The list is append-only; there is no clear or reload.
#[derive(Debug)]
pub struct Presenter<V: View> {
    items: Vec<Mountain>,
    overlay: Option<Overlay>,
    view: V,
}

impl<V: View> Presenter<V> {
    /// Create an empty presenter bound to `view`.
    pub fn new(view: V) -> Self {
        Self {
            items: Vec::new(),
            overlay: None,
            view,
        }
    }

    /// Append records in order and refresh the view.
    pub fn append_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Mountain>,
    {
        let before = self.items.len();
        self.items.extend(records);
        debug!("Appended {} records", self.items.len() - before);
        self.view.refresh(&self.items);
    }

    /// Show the summary of the record at `index`.
    ///
    /// Returns `None` and leaves the view untouched when `index` is out of
    /// range.
    pub fn on_select(&mut self, index: usize) -> Option<&Overlay> {
        let Some(mountain) = self.items.get(index) else {
            warn!(
                "Ignoring selection of row {} ({} rows)",
                index,
                self.items.len()
            );
            return None;
        };

        let overlay = Overlay::for_mountain(mountain);
        self.view.show_overlay(&overlay);
        self.overlay = Some(overlay);
        self.overlay.as_ref()
    }

    /// User-triggered dismiss of the current overlay.
    pub fn dismiss(&mut self) {
        if self.overlay.take().is_some() {
            self.view.hide_overlay();
        }
    }

    /// Current overlay, if one is shown.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Records in display order.
    pub fn items(&self) -> &[Mountain] {
        &self.items
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&Mountain> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The bound view.
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// View that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingView {
        pub refreshes: Vec<Vec<String>>,
        pub shown: Vec<String>,
        pub hidden: usize,
    }

    impl View for RecordingView {
        fn refresh(&mut self, items: &[Mountain]) {
            self.refreshes
                .push(items.iter().map(|m| m.name.clone()).collect());
        }

        fn show_overlay(&mut self, overlay: &Overlay) {
            self.shown.push(overlay.text.clone());
        }

        fn hide_overlay(&mut self) {
            self.hidden += 1;
        }
    }

    fn mountain(name: &str, location: &str, size: i64) -> Mountain {
        Mountain {
            name: name.to_string(),
            location: location.to_string(),
            size,
            ..Default::default()
        }
    }

    #[test]
    fn test_append_preserves_order_across_batches() {
        let mut presenter = Presenter::new(RecordingView::default());
        presenter.append_all(vec![mountain("A", "x", 1), mountain("B", "y", 2)]);
        presenter.append_all(vec![mountain("C", "z", 3)]);

        let names: Vec<_> = presenter.items().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(presenter.len(), 3);
        assert_eq!(
            presenter.view().refreshes,
            vec![vec!["A", "B"], vec!["A", "B", "C"]]
        );
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut presenter = Presenter::new(RecordingView::default());
        presenter.append_all(vec![mountain("A", "x", 1), mountain("A", "x", 1)]);
        assert_eq!(presenter.len(), 2);
    }

    #[test]
    fn test_select_shows_summary() {
        let mut presenter = Presenter::new(RecordingView::default());
        presenter.append_all(vec![
            mountain("Kebnekaise", "Lapland", 2096),
            mountain("Sarektjåkkå", "Lapland", 2089),
        ]);

        let overlay = presenter.on_select(1).unwrap().clone();
        assert_eq!(overlay.text, "Sarektjåkkå - Lapland: 2089");
        assert_eq!(overlay.action, "Dismiss");
        assert_eq!(overlay.duration, OVERLAY_DURATION);
        assert_eq!(presenter.overlay(), Some(&overlay));
        assert_eq!(presenter.view().shown, vec!["Sarektjåkkå - Lapland: 2089"]);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut presenter = Presenter::new(RecordingView::default());
        assert!(presenter.on_select(0).is_none());

        presenter.append_all(vec![mountain("A", "x", 1)]);
        assert!(presenter.on_select(1).is_none());
        assert!(presenter.overlay().is_none());
        assert!(presenter.view().shown.is_empty());
    }

    #[test]
    fn test_new_selection_replaces_overlay() {
        let mut presenter = Presenter::new(RecordingView::default());
        presenter.append_all(vec![mountain("A", "x", 1), mountain("B", "y", 2)]);

        presenter.on_select(0);
        presenter.on_select(1);
        assert_eq!(presenter.overlay().unwrap().text, "B - y: 2");
        assert_eq!(presenter.view().shown.len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut presenter = Presenter::new(RecordingView::default());
        presenter.append_all(vec![mountain("A", "x", 1)]);

        presenter.dismiss();
        assert_eq!(presenter.view().hidden, 0);

        presenter.on_select(0);
        presenter.dismiss();
        assert!(presenter.overlay().is_none());
        assert_eq!(presenter.view().hidden, 1);

        presenter.dismiss();
        assert_eq!(presenter.view().hidden, 1);
    }
}
