//! lexfind app: wires config, catalog, taggers and the search service to a
//! line-oriented terminal front end.

pub mod dictation;
pub mod event;
pub mod presenter;
pub mod service;

use anyhow::Context;
use dictation::{AudioFrame, Dictation, ScriptedRecognizer};
use event::{Command, SearchEvent};
use lexfind_core::config::{Backend, Config};
use lexfind_core::{Catalog, LocalTagger, Tagger, UnavailableTagger};
use lexfind_remote::RemoteTagger;
use presenter::TerminalPresenter;
use service::{SearchService, Taggers};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub use presenter::Presenter;

/// Demo catalog compiled into the binary; used when no path is configured.
pub const DEMO_CATALOG: &str = include_str!("../catalog/products.json");

/// Samples per simulated audio frame (20 ms at 16 kHz).
const FRAME_SAMPLES: usize = 320;

/// Command-line overrides layered over the loaded config.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub backend: Option<Backend>,
    pub catalog: Option<PathBuf>,
}

/// Run the interactive search loop on stdin/stdout until EOF or `:quit`.
pub async fn run(options: RunOptions) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config load failed; using defaults");
        Config::defaults()
    });

    let catalog_path = options.catalog.or_else(|| config.catalog.path());
    let catalog = Arc::new(load_catalog(catalog_path.as_deref())?);
    let taggers = build_taggers(&config)?;
    let remote_configured = taggers.has_remote();
    let backend = options.backend.unwrap_or(config.search.backend);
    if let Some(notice) = unconfigured_backend_notice(backend, remote_configured) {
        eprintln!("{notice}");
    }

    let service = SearchService::new(catalog, taggers, TerminalPresenter::new(std::io::stdout()))
        .with_backend(backend);
    tracing::info!(backend = %service.backend(), "lexfind ready");

    let (events, rx) = mpsc::channel(32);
    let worker = tokio::spawn(service.run(rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match event::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        let event = match command {
            Command::Quit => break,
            Command::Cancel => SearchEvent::Cancel,
            Command::Backend(backend) => {
                if let Some(notice) = unconfigured_backend_notice(backend, remote_configured) {
                    eprintln!("{notice}");
                }
                SearchEvent::SwitchBackend(backend)
            }
            Command::Query(text) => SearchEvent::Submit(text),
            Command::Dictate(script) => {
                dictate(&script, config.dictation.settle_delay(), &events).await?;
                continue;
            }
        };
        events.send(event).await.context("search service stopped")?;
    }

    drop(events);
    worker.await.context("search service panicked")?;
    Ok(())
}

/// Load the catalog at `path`, or the embedded demo catalog.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Catalog::from_json(DEMO_CATALOG).context("embedded demo catalog"),
    }
}

/// Build the local tagger for the configured locale and, when an API key is
/// set, the remote one.
pub fn build_taggers(config: &Config) -> anyhow::Result<Taggers> {
    let locale = &config.search.locale;
    let local: Arc<dyn Tagger> = match LocalTagger::new(locale) {
        Ok(tagger) => Arc::new(tagger),
        Err(err) => {
            tracing::warn!(error = %err, "no local tagger for locale");
            Arc::new(UnavailableTagger::new(locale.as_str()))
        }
    };
    let mut taggers = Taggers::new(local);

    if config.remote.api_key.trim().is_empty() {
        tracing::debug!("remote.api_key not set; remote backend disabled");
    } else {
        let remote = RemoteTagger::from_config(&config.remote).context("building remote tagger")?;
        taggers = taggers.with_remote(Arc::new(remote));
    }
    Ok(taggers)
}

/// Message for a requested backend the service will not switch to.
pub fn unconfigured_backend_notice(backend: Backend, remote_configured: bool) -> Option<String> {
    match backend {
        Backend::Remote if !remote_configured => Some(
            "remote backend not configured (set remote.api_key); staying on local".to_string(),
        ),
        _ => None,
    }
}

/// Simulate one dictation session: each word of `script` is one audio frame.
async fn dictate(
    script: &str,
    settle_delay: Duration,
    events: &mpsc::Sender<SearchEvent>,
) -> anyhow::Result<()> {
    let recognizer = Arc::new(ScriptedRecognizer::new(script));
    let frames = recognizer.word_count();
    let mut dictation = Dictation::new(recognizer, settle_delay);

    let transcript = match dictation.start() {
        Ok(handle) => {
            events.send(SearchEvent::RecordingStarted).await.context("search service stopped")?;
            for _ in 0..frames {
                if handle.push(AudioFrame::silence(FRAME_SAMPLES)).is_err() {
                    break;
                }
            }
            handle.finish().await
        }
        Err(err) => Err(err),
    };
    events.send(SearchEvent::Dictated(transcript)).await.context("search service stopped")?;
    Ok(())
}
