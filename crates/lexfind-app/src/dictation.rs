//! Dictation capture.
//!
//! A session buffers audio frames into a [`RecognitionRequest`] that a
//! [`Recognizer`] consumes, while the recognizer streams back partial
//! transcripts (each one the best full transcription so far). Finishing a
//! session sends the stop signal, keeps collecting partials for the settle
//! delay, then yields the latest transcript exactly once.
//!
//! Only one session is live at a time: [`Dictation::start`] tears down the
//! previous one, discarding its buffered request and partial state.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("speech recognizer unavailable for locale {locale}")]
    RecognizerUnavailable { locale: String },
    #[error("recognition failed: {0}")]
    Recognition(String),
    #[error("dictation session was cancelled")]
    Cancelled,
}

/// One buffer of 16-bit PCM samples from the input device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioFrame {
    pub samples: Vec<i16>,
}

impl AudioFrame {
    pub fn silence(len: usize) -> Self {
        Self { samples: vec![0; len] }
    }
}

/// Buffered recognition request: frames appended here are queued for the
/// recognizer until it reads them.
#[derive(Debug)]
pub struct RecognitionRequest {
    frames: mpsc::UnboundedSender<AudioFrame>,
    appended: usize,
}

impl RecognitionRequest {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AudioFrame>) {
        let (frames, rx) = mpsc::unbounded_channel();
        (Self { frames, appended: 0 }, rx)
    }

    pub fn append(&mut self, frame: AudioFrame) {
        if self.frames.send(frame).is_ok() {
            self.appended += 1;
        }
    }

    pub fn appended(&self) -> usize {
        self.appended
    }
}

/// Speech-to-text collaborator.
pub trait Recognizer: Send + Sync + 'static {
    fn locale(&self) -> &str;

    fn is_available(&self) -> bool;

    /// Start recognizing `audio`. The returned channel carries partial
    /// transcripts and closes when recognition ends.
    fn start(
        &self,
        audio: mpsc::UnboundedReceiver<AudioFrame>,
    ) -> mpsc::UnboundedReceiver<Result<String, CaptureError>>;
}

// ---------------------------------------------------------------------------
// Dictation controller
// ---------------------------------------------------------------------------

pub struct Dictation<R: Recognizer> {
    recognizer: Arc<R>,
    settle_delay: Duration,
    active: Option<AbortHandle>,
}

impl<R: Recognizer> Dictation<R> {
    pub fn new(recognizer: Arc<R>, settle_delay: Duration) -> Self {
        Self { recognizer, settle_delay, active: None }
    }

    /// Start a new session, stopping any session still running.
    pub fn start(&mut self) -> Result<DictationHandle, CaptureError> {
        self.teardown();

        if !self.recognizer.is_available() {
            return Err(CaptureError::RecognizerUnavailable {
                locale: self.recognizer.locale().to_string(),
            });
        }

        let (audio_tx, audio_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();

        let task = tokio::spawn(run_session(
            Arc::clone(&self.recognizer),
            audio_rx,
            stop_rx,
            self.settle_delay,
            done_tx,
        ));
        self.active = Some(task.abort_handle());
        tracing::debug!("dictation session started");

        Ok(DictationHandle { audio: audio_tx, stop: stop_tx, transcript: done_rx })
    }

    /// Abort the running session, if any.
    pub fn teardown(&mut self) {
        if let Some(active) = self.active.take() {
            if !active.is_finished() {
                tracing::debug!("tearing down previous dictation session");
            }
            active.abort();
        }
    }
}

impl<R: Recognizer> Drop for Dictation<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Producer side of a live session.
pub struct DictationHandle {
    audio: mpsc::UnboundedSender<AudioFrame>,
    stop: oneshot::Sender<()>,
    transcript: oneshot::Receiver<Result<String, CaptureError>>,
}

impl DictationHandle {
    /// Append captured audio. Fails with `Cancelled` once the session is gone.
    pub fn push(&self, frame: AudioFrame) -> Result<(), CaptureError> {
        self.audio.send(frame).map_err(|_| CaptureError::Cancelled)
    }

    /// Send the stop signal and wait for the settled transcript.
    pub async fn finish(self) -> Result<String, CaptureError> {
        let _ = self.stop.send(());
        self.transcript.await.unwrap_or(Err(CaptureError::Cancelled))
    }
}

async fn run_session<R: Recognizer>(
    recognizer: Arc<R>,
    mut audio: mpsc::UnboundedReceiver<AudioFrame>,
    mut stop: oneshot::Receiver<()>,
    settle_delay: Duration,
    done: oneshot::Sender<Result<String, CaptureError>>,
) {
    let (mut request, request_rx) = RecognitionRequest::channel();
    let mut partials = recognizer.start(request_rx);
    let mut partials_open = true;
    let mut latest: Option<String> = None;
    let mut failure: Option<CaptureError> = None;

    // Capture until the stop signal.
    loop {
        tokio::select! {
            _ = &mut stop => break,
            frame = audio.recv() => match frame {
                Some(frame) => request.append(frame),
                None => break,
            },
            partial = partials.recv(), if partials_open => {
                partials_open = record(partial, &mut latest, &mut failure);
            }
        }
    }

    tracing::debug!(frames = request.appended(), "dictation stopped; settling");
    drop(request);
    drop(audio);

    // Let in-flight partials arrive.
    let settle = tokio::time::sleep(settle_delay);
    tokio::pin!(settle);
    while partials_open {
        tokio::select! {
            _ = &mut settle => break,
            partial = partials.recv() => {
                partials_open = record(partial, &mut latest, &mut failure);
            }
        }
    }

    let result = match latest.filter(|t| !t.trim().is_empty()) {
        Some(transcript) => Ok(transcript),
        None => Err(failure.unwrap_or_else(|| CaptureError::Recognition("no speech recognized".into()))),
    };
    tracing::debug!(?result, "dictation finished");
    let _ = done.send(result);
}

/// Fold one recognizer message into the session. Returns whether the
/// partials channel is still open.
fn record(
    partial: Option<Result<String, CaptureError>>,
    latest: &mut Option<String>,
    failure: &mut Option<CaptureError>,
) -> bool {
    match partial {
        Some(Ok(transcript)) => {
            tracing::debug!(%transcript, "partial transcript");
            *latest = Some(transcript);
            true
        }
        Some(Err(err)) => {
            tracing::warn!(error = %err, "recognition error");
            *failure = Some(err);
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// ScriptedRecognizer
// ---------------------------------------------------------------------------

/// Recognizer that "hears" a fixed script: each audio frame reveals one more
/// word, and the end of audio yields the whole script as the final result.
#[derive(Debug, Clone)]
pub struct ScriptedRecognizer {
    words: Vec<String>,
    locale: String,
    available: bool,
}

impl ScriptedRecognizer {
    pub fn new(script: &str) -> Self {
        Self {
            words: script.split_whitespace().map(str::to_string).collect(),
            locale: "en-US".to_string(),
            available: true,
        }
    }

    pub fn unavailable(locale: &str) -> Self {
        Self { words: Vec::new(), locale: locale.to_string(), available: false }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Recognizer for ScriptedRecognizer {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn start(
        &self,
        mut audio: mpsc::UnboundedReceiver<AudioFrame>,
    ) -> mpsc::UnboundedReceiver<Result<String, CaptureError>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let words = self.words.clone();
        tokio::spawn(async move {
            let mut heard = 0usize;
            while audio.recv().await.is_some() {
                heard = (heard + 1).min(words.len());
                if tx.send(Ok(words[..heard].join(" "))).is_err() {
                    return;
                }
            }
            let _ = tx.send(Ok(words.join(" ")));
        });
        rx
    }
}
