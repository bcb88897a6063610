//! Background key listener with a capacity-one handoff to the game loop.
//!
//! The listener thread blocks on the event source between key presses and
//! blocks again on the handoff while the previous key is still unread. The game
//! loop never waits: [`InputSource::poll`] is a `try_recv`.

use std::io;
use std::thread;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Keys that may wait in the handoff before the listener blocks.
const HANDOFF_CAPACITY: usize = 1;

/// Consumer side of the key handoff.
#[derive(Debug)]
pub struct InputSource {
    rx: mpsc::Receiver<KeyEvent>,
}

impl InputSource {
    /// Start a listener thread draining `events`.
    ///
    /// The thread exits when `events` ends or this source is dropped. It is
    /// never joined; on shutdown it is simply abandoned.
    pub fn spawn<I>(events: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = KeyEvent>,
        I::IntoIter: Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<KeyEvent>(HANDOFF_CAPACITY);
        let events = events.into_iter();

        thread::Builder::new()
            .name("pong-input".to_string())
            .spawn(move || {
                info!("input listener started");
                for key in events {
                    if tx.blocking_send(key).is_err() {
                        break;
                    }
                }
                info!("input listener stopped");
            })?;

        Ok(Self { rx })
    }

    /// Listen on the real terminal.
    pub fn from_terminal() -> io::Result<Self> {
        Self::spawn(terminal_keys())
    }

    /// Take the waiting key, if any, without blocking.
    pub fn poll(&mut self) -> Option<KeyEvent> {
        self.rx.try_recv().ok()
    }
}

/// Lazy, infinite sequence of key presses read from the terminal.
///
/// Release and repeat events are skipped. The sequence ends if reading fails.
pub fn terminal_keys() -> impl Iterator<Item = KeyEvent> + Send + 'static {
    std::iter::from_fn(|| loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
            Ok(_) => continue,
            Err(err) => {
                warn!(error = %err, "terminal event read failed");
                return None;
            }
        }
    })
}
