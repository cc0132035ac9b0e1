//! Serializes access to a [`Controller`] running on its own task.
//!
//! Commands go through a channel with a single slot and the worker
//! handles them one at a time, so a second submission made while the
//! first is still waiting on the tutor is queued behind it instead of
//! interleaving with it.
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::controller::Controller;
use super::state::Session;
use crate::service::TutorService;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Conversation worker is no longer running")]
    WorkerGone,
}

#[derive(Debug)]
enum Request {
    Edit(String),
    Submit(String),
    SubmitInput,
    Quiz,
    Snapshot,
}

struct Command {
    request: Request,
    reply: oneshot::Sender<Session>,
}

/// Cloneable front door to a conversation. Every call resolves with a
/// snapshot of the session taken after the command fully settled.
#[derive(Clone)]
pub struct ConversationHandle {
    tx: mpsc::Sender<Command>,
}

impl ConversationHandle {
    pub async fn edit(&self, text: &str) -> Result<Session, HandleError> {
        self.send(Request::Edit(text.to_string())).await
    }

    pub async fn submit(&self, text: &str) -> Result<Session, HandleError> {
        self.send(Request::Submit(text.to_string())).await
    }

    pub async fn submit_input(&self) -> Result<Session, HandleError> {
        self.send(Request::SubmitInput).await
    }

    pub async fn quiz(&self) -> Result<Session, HandleError> {
        self.send(Request::Quiz).await
    }

    pub async fn snapshot(&self) -> Result<Session, HandleError> {
        self.send(Request::Snapshot).await
    }

    async fn send(&self, request: Request) -> Result<Session, HandleError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command { request, reply })
            .await
            .map_err(|_| HandleError::WorkerGone)?;
        rx.await.map_err(|_| HandleError::WorkerGone)
    }
}

/// Move `controller` onto a new task. The task exits once every
/// handle has been dropped.
pub fn spawn<S>(mut controller: Controller<S>) -> (ConversationHandle, JoinHandle<()>)
where
    S: TutorService + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::channel::<Command>(1);

    let worker = tokio::spawn(async move {
        while let Some(Command { request, reply }) = rx.recv().await {
            tracing::debug!("Handling {:?}", request);
            match request {
                Request::Edit(text) => controller.edit(&text),
                Request::Submit(text) => controller.submit(&text).await,
                Request::SubmitInput => controller.submit_input().await,
                Request::Quiz => controller.quiz().await,
                Request::Snapshot => {}
            }
            // The caller may have given up waiting; that's fine
            let _ = reply.send(controller.session().clone());
        }
        tracing::debug!("Conversation worker stopped");
    });

    (ConversationHandle { tx }, worker)
}
