//! Plain-text view for terminals.

use std::io::{self, Write};

use tracing::warn;

use crate::models::Mountain;
use crate::presenter::{Overlay, View};

/// [`View`] that writes rows and overlays to a writer.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
    list_rows: bool,
}

impl TerminalView<io::Stdout> {
    /// View printing to standard output.
    pub fn stdout(list_rows: bool) -> Self {
        Self::new(io::stdout(), list_rows)
    }
}

impl<W: Write> TerminalView<W> {
    /// Create a view. With `list_rows` off, refreshes print nothing.
    pub fn new(out: W, list_rows: bool) -> Self {
        Self { out, list_rows }
    }

    /// Consume the view and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_rows(&mut self, items: &[Mountain]) -> io::Result<()> {
        for (i, mountain) in items.iter().enumerate() {
            writeln!(self.out, "{:>3}. {}", i, mountain)?;
        }
        self.out.flush()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn refresh(&mut self, items: &[Mountain]) {
        if !self.list_rows {
            return;
        }
        if let Err(e) = self.write_rows(items) {
            warn!("Failed to draw list: {}", e);
        }
    }

    fn show_overlay(&mut self, overlay: &Overlay) {
        if let Err(e) = writeln!(self.out, "{}  [{}]", overlay.text, overlay.action) {
            warn!("Failed to draw overlay: {}", e);
        }
    }

    fn hide_overlay(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::Presenter;

    fn mountain(name: &str) -> Mountain {
        Mountain {
            name: name.to_string(),
            location: "Alps".to_string(),
            size: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_and_overlay() {
        let mut presenter = Presenter::new(TerminalView::new(Vec::new(), true));
        presenter.append_all(vec![mountain("Eiger"), mountain("Mönch")]);
        presenter.on_select(1);

        let view = presenter.view();
        let text = String::from_utf8(view.out.clone()).unwrap();
        assert_eq!(
            text,
            "  0. Eiger\n  1. Mönch\nMönch - Alps: 100  [Dismiss]\n"
        );
    }

    #[test]
    fn test_quiet_refresh() {
        let mut view = TerminalView::new(Vec::new(), false);
        view.refresh(&[mountain("Eiger")]);
        assert!(view.into_inner().is_empty());
    }
}
