//! A [`Presenter`] that records what it was told to show.

use lexfind_app::Presenter;
use lexfind_core::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Results(Vec<String>),
    NoResults(Option<String>),
    Cleared,
    Listening,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub shown: Vec<Shown>,
}

impl Presenter for RecordingPresenter {
    fn show_results(&mut self, products: &[Product]) {
        self.shown.push(Shown::Results(products.iter().map(|p| p.name.clone()).collect()));
    }

    fn show_no_results(&mut self, diagnostic: Option<&str>) {
        self.shown.push(Shown::NoResults(diagnostic.map(str::to_string)));
    }

    fn clear(&mut self) {
        self.shown.push(Shown::Cleared);
    }

    fn recording_started(&mut self) {
        self.shown.push(Shown::Listening);
    }
}

/// Shorthand for `Shown::Results` from product names.
pub fn results(names: &[&str]) -> Shown {
    Shown::Results(names.iter().map(|n| n.to_string()).collect())
}
