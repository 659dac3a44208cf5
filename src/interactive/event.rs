use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Polls the terminal on a background thread and hands key presses and ticks to the
/// async loop. Ticks let the screen pick up results of requests that finished meanwhile.
pub struct EventHandler {
    receiver: UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = unbounded_channel();

        thread::spawn(move || loop {
            match event::poll(Duration::from_millis(tick_rate)) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if key.kind == KeyEventKind::Press
                            && sender.send(Event::Key(key)).is_err()
                        {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => {}
            }
            if sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { receiver }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}
