pub mod action;
pub mod event;
pub mod session;
pub mod task;

pub use action::*;
pub use event::{ArcEventTx, Event, EventTx};
pub use session::SessionSnapshot;
pub use task::*;
