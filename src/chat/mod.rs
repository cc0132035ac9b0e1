mod controller;
mod handle;
pub mod models;
mod state;

pub use controller::{Controller, SessionEvent};
pub use handle::{ConversationHandle, HandleError, spawn};
pub use models::{Message, Sender, Transcript};
pub use state::{Action, Effect, Session, update};
