use std::sync::Arc;

use tokio::sync::mpsc;
use tui_textarea::Input;

use crate::fetch::FetchError;

use super::{SessionSnapshot, TaskList};

#[derive(Debug)]
pub enum Event {
    /// Fresh session state pushed by the transport layer.
    SessionUpdate(SessionSnapshot),

    /// The input box submitted its content.
    InputSubmitted(String),

    TaskFetchStarted(String),
    TaskFetchFinished {
        path: String,
        result: Result<Arc<TaskList>, FetchError>,
    },

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardNewLine,
    KeyboardPaste(String),
    KeyboardTab,
    KeyboardBackTab,

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
}

#[async_trait::async_trait]
pub trait EventTx {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>>;
}

#[async_trait::async_trait]
impl EventTx for mpsc::Sender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event).await
    }
}

#[async_trait::async_trait]
impl EventTx for mpsc::UnboundedSender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event)
    }
}

pub type ArcEventTx = Arc<dyn EventTx + Send + Sync>;
