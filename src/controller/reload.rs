use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::logging::log_info;

/// Re-renders the whole page, the way a browser reload would.
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}

/// Forwards reload requests to the loop that owns the screen.
pub struct ChannelReloader {
    sender: UnboundedSender<()>,
}

impl ChannelReloader {
    pub fn new() -> (Self, UnboundedReceiver<()>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl PageReloader for ChannelReloader {
    fn reload(&self) {
        if self.sender.send(()).is_err() {
            log_info("Reload requested after the page was closed");
        }
    }
}

/// For one-shot commands: there is no screen to re-render.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReloader;

impl PageReloader for LogReloader {
    fn reload(&self) {
        log_info("Page reload requested");
    }
}
