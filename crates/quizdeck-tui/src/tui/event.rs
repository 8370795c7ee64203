use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Terminal events the application reacts to
#[derive(Clone, Debug)]
pub enum Event {
    /// Periodic tick, keeps time-based widgets fresh
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal was resized
    Resize,
    /// Reading terminal input failed
    Error(String),
}

/// Drains crossterm's event stream on a background task and forwards the
/// events this application cares about: key presses, resizes, and ticks.
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        tokio::spawn(poll_terminal(sender, cancel.clone(), tick_rate));

        Self { receiver, cancel }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Stop the background task
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn poll_terminal(
    sender: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
) {
    let mut stream = event::EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            _ = ticker.tick() => {
                if sender.send(Event::Tick).is_err() {
                    break;
                }
            }

            maybe_event = stream.next().fuse() => match maybe_event {
                // Only key-down matters; Windows reports releases too
                Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    let _ = sender.send(Event::Key(key));
                }
                Some(Ok(CrosstermEvent::Resize(..))) => {
                    let _ = sender.send(Event::Resize);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    let _ = sender.send(Event::Error(e.to_string()));
                }
                None => break,
            }
        }
    }
}
