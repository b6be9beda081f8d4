//! Async search service: drives a [`SearchMachine`] from user events and
//! tagging completions.
//!
//! Each accepted submission spawns one tagging task. The task reports back on
//! an internal channel tagged with the submission's generation; completions
//! the machine no longer waits for are dropped there. A task that panics or
//! is cancelled still reports, as [`TagError::Aborted`].

use crate::event::SearchEvent;
use crate::presenter::Presenter;
use lexfind_core::config::Backend;
use lexfind_core::search::{Resolution, SearchMachine, SearchState, Submission};
use lexfind_core::{Catalog, TagError, Tagger, Token};
use std::sync::Arc;
use tokio::sync::mpsc;

/// The tagging backends available to a service.
#[derive(Clone)]
pub struct Taggers {
    local: Arc<dyn Tagger>,
    remote: Option<Arc<dyn Tagger>>,
}

impl Taggers {
    pub fn new(local: Arc<dyn Tagger>) -> Self {
        Self { local, remote: None }
    }

    pub fn with_remote(mut self, remote: Arc<dyn Tagger>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    fn get(&self, backend: Backend) -> Option<&Arc<dyn Tagger>> {
        match backend {
            Backend::Local => Some(&self.local),
            Backend::Remote => self.remote.as_ref(),
        }
    }
}

struct Completion {
    generation: u64,
    result: Result<Vec<Token>, TagError>,
}

pub struct SearchService<P: Presenter> {
    machine: SearchMachine,
    taggers: Taggers,
    backend: Backend,
    presenter: P,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<P: Presenter> SearchService<P> {
    pub fn new(catalog: Arc<Catalog>, taggers: Taggers, presenter: P) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            machine: SearchMachine::new(catalog),
            taggers,
            backend: Backend::Local,
            presenter,
            completions_tx,
            completions_rx,
        }
    }

    /// Start on `backend`. Falls back to local when that backend is not
    /// configured.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.switch_backend(backend);
        self
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn state(&self) -> &SearchState {
        self.machine.state()
    }

    /// Process events until the channel closes, then wait for the query in
    /// flight (if any) before returning the presenter.
    pub async fn run(mut self, mut events: mpsc::Receiver<SearchEvent>) -> P {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                Some(done) = self.completions_rx.recv() => self.complete(done),
            }
        }

        while matches!(self.machine.state(), SearchState::Querying { .. }) {
            match self.completions_rx.recv().await {
                Some(done) => self.complete(done),
                None => break,
            }
        }
        tracing::debug!("search service stopped");
        self.presenter
    }

    fn handle(&mut self, event: SearchEvent) {
        tracing::debug!(?event, "search event");
        match event {
            SearchEvent::Submit(text) => self.submit(&text),
            SearchEvent::Dictated(Ok(transcript)) => self.submit(&transcript),
            SearchEvent::Dictated(Err(err)) => {
                tracing::warn!(error = %err, "dictation produced no submission");
            }
            SearchEvent::RecordingStarted => self.presenter.recording_started(),
            SearchEvent::Cancel => {
                self.machine.cancel();
                self.presenter.clear();
            }
            SearchEvent::SwitchBackend(backend) => self.switch_backend(backend),
        }
    }

    fn switch_backend(&mut self, backend: Backend) {
        if backend == self.backend {
            return;
        }
        if self.taggers.get(backend).is_none() {
            tracing::warn!(%backend, "backend not configured; staying on {}", self.backend);
            return;
        }
        tracing::info!(from = %self.backend, to = %backend, "tagging backend switched");
        self.backend = backend;
    }

    fn submit(&mut self, text: &str) {
        let Some(Submission { generation, text }) = self.machine.submit(text) else {
            return;
        };
        let Some(tagger) = self.taggers.get(self.backend).cloned() else {
            return;
        };
        let completions = self.completions_tx.clone();
        tracing::debug!(generation, backend = tagger.name(), "tagging query");
        tokio::spawn(async move {
            let tagging = tokio::spawn(async move { tagger.tag(&text).await });
            let result = match tagging.await {
                Ok(result) => result,
                Err(err) => Err(TagError::Aborted(err.to_string())),
            };
            let _ = completions.send(Completion { generation, result });
        });
    }

    fn complete(&mut self, done: Completion) {
        if self.machine.resolve(done.generation, done.result) == Resolution::Stale {
            return;
        }
        match self.machine.state() {
            SearchState::Matched { products, .. } => self.presenter.show_results(products),
            SearchState::NoResults { diagnostic, .. } => {
                self.presenter.show_no_results(diagnostic.as_deref())
            }
            SearchState::Failed { .. } | SearchState::Idle | SearchState::Querying { .. } => {}
        }
    }
}
