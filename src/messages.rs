use std::sync::Mutex;

/// Sink for one-line status messages shown to the user on the next render.
pub trait Messenger {
    fn set_message(&self, message: &str);
}

/// In-process message queue. Messages are handed out once.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<Vec<String>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued message, leaving the queue empty.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Messenger for MessageQueue {
    fn set_message(&self, message: &str) {
        log::debug!("set_message message={message}");
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

impl<M: Messenger + ?Sized> Messenger for &M {
    fn set_message(&self, message: &str) {
        (**self).set_message(message)
    }
}
