//! Presentation boundary between the search service and whatever shows
//! results to the user.

use lexfind_core::search::NO_RESULTS_MESSAGE;
use lexfind_core::Product;
use std::io::Write;

/// Receives display instructions from [`crate::service::SearchService`].
pub trait Presenter: Send + 'static {
    /// Render matched products in catalog order.
    fn show_results(&mut self, products: &[Product]);

    /// Show the fixed no-results message, with an optional diagnostic.
    fn show_no_results(&mut self, diagnostic: Option<&str>);

    /// Remove any results on screen.
    fn clear(&mut self);

    /// Audio capture began.
    fn recording_started(&mut self) {}
}

/// Line-oriented presenter for a terminal or any other writer.
pub struct TerminalPresenter<W: Write + Send + 'static> {
    out: W,
}

impl<W: Write + Send + 'static> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl<W: Write + Send + 'static> Presenter for TerminalPresenter<W> {
    fn show_results(&mut self, products: &[Product]) {
        for product in products {
            self.emit(&format!("{} — {}", product.name, product.features));
        }
    }

    fn show_no_results(&mut self, diagnostic: Option<&str>) {
        self.emit(NO_RESULTS_MESSAGE);
        if let Some(diagnostic) = diagnostic {
            self.emit(&format!("  ({diagnostic})"));
        }
    }

    fn clear(&mut self) {
        self.emit("(cleared)");
    }

    fn recording_started(&mut self) {
        self.emit("(listening...)");
    }
}
