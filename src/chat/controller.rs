use tokio::sync::mpsc;

use super::models::{Message, QUIZ_TRIGGER};
use super::state::{Action, Effect, Session, update};
use crate::service::TutorService;

/// Emitted after every change to the session so a view can redraw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    InputChanged(String),
    MessageAppended(Message),
    BusyChanged(bool),
}

/// Owns a conversation with the tutor and mediates between user
/// actions and the tutoring service.
///
/// Each submitted action goes `Idle -> AwaitingReply -> Idle` and
/// always appends exactly two messages: the user's text before the
/// request is sent and the tutor's reply (or the connection error
/// notice) once it settles. Transport failures are never returned to
/// the caller.
pub struct Controller<S> {
    session: Session,
    service: S,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl<S: TutorService + Send + Sync> Controller<S> {
    pub fn new(service: S) -> Self {
        Self {
            session: Session::default(),
            service,
            subscribers: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a new listener for session changes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn edit(&mut self, text: &str) {
        self.apply(Action::Edit(text.to_string()));
    }

    /// Send `text` to the tutor and wait for the reply. Blank text
    /// (after trimming) is ignored.
    pub async fn submit(&mut self, text: &str) {
        let Some(Effect::Send(payload)) = self.apply(Action::Submit(text.to_string())) else {
            tracing::debug!("Ignoring blank submission");
            return;
        };

        let action = match self.service.chat(&payload).await {
            Ok(reply) => Action::ReplyReceived(reply),
            Err(err) => {
                tracing::warn!("Tutor request failed: {}", err);
                Action::ReplyFailed(err)
            }
        };
        self.apply(action);
    }

    /// Submit whatever is currently in the input buffer.
    pub async fn submit_input(&mut self) {
        let text = self.session.input.clone();
        self.submit(&text).await;
    }

    /// Ask the tutor for a quiz. Ignores the input buffer.
    pub async fn quiz(&mut self) {
        self.submit(QUIZ_TRIGGER).await;
    }

    fn apply(&mut self, action: Action) -> Option<Effect> {
        let before_len = self.session.transcript.len();
        let before_busy = self.session.busy;
        let before_input = self.session.input.clone();

        let (session, effect) = update(std::mem::take(&mut self.session), action);
        self.session = session;

        let mut events = Vec::new();
        if self.session.input != before_input {
            events.push(SessionEvent::InputChanged(self.session.input.clone()));
        }
        for msg in &self.session.transcript.messages()[before_len..] {
            events.push(SessionEvent::MessageAppended(msg.clone()));
        }
        if self.session.busy != before_busy {
            events.push(SessionEvent::BusyChanged(self.session.busy));
        }
        for event in events {
            self.notify(event);
        }

        effect
    }

    fn notify(&mut self, event: SessionEvent) {
        // Drop listeners that hung up
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::{CONNECTION_ERROR_NOTICE, GREETING, Sender};
    use crate::service::TransportError;
    use std::sync::{Arc, Mutex};

    /// Replies with a canned answer and records every payload it saw.
    struct MockTutor {
        reply: Result<String, u16>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockTutor {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(503),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl TutorService for MockTutor {
        async fn chat(&self, message: &str) -> Result<String, TransportError> {
            self.calls.lock().unwrap().push(message.to_string());
            self.reply.clone().map_err(TransportError::Status)
        }
    }

    #[tokio::test]
    async fn it_answers_a_question() {
        let mut controller = Controller::new(MockTutor::replying("Osmosis is..."));
        controller.edit("What is osmosis?");
        controller.submit("What is osmosis?").await;

        let session = controller.session();
        assert_eq!(
            session.transcript.messages(),
            &[
                Message::tutor(GREETING),
                Message::user("What is osmosis?"),
                Message::tutor("Osmosis is..."),
            ]
        );
        assert_eq!(session.input, "");
        assert!(!session.busy);
    }

    #[tokio::test]
    async fn it_grows_transcript_by_two_per_action() {
        let mut controller = Controller::new(MockTutor::replying("ok"));
        for (i, text) in ["one", "two", " three "].iter().enumerate() {
            controller.submit(text).await;
            let transcript = &controller.session().transcript;
            assert_eq!(transcript.len(), 1 + 2 * (i + 1));
            assert_eq!(
                transcript.messages()[transcript.len() - 2],
                Message::user(text)
            );
        }
    }

    #[tokio::test]
    async fn it_does_nothing_for_blank_text() {
        let tutor = MockTutor::replying("ok");
        let calls = Arc::clone(&tutor.calls);
        let mut controller = Controller::new(tutor);
        controller.edit("draft");

        controller.submit("").await;
        controller.submit("   ").await;

        assert_eq!(controller.session().transcript.len(), 1);
        assert_eq!(controller.session().input, "draft");
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_shows_notice_when_service_fails() {
        let mut controller = Controller::new(MockTutor::failing());
        controller.edit("hello");
        controller.submit_input().await;

        let session = controller.session();
        assert_eq!(session.transcript.len(), 3);
        let last = session.transcript.last().unwrap();
        assert_eq!(last.sender(), Sender::Tutor);
        assert_eq!(last.text(), CONNECTION_ERROR_NOTICE);
        assert_eq!(session.input, "");
        assert!(!session.busy);
    }

    #[tokio::test]
    async fn it_sends_quiz_trigger_regardless_of_input() {
        let tutor = MockTutor::replying("Q1: ...");
        let calls = Arc::clone(&tutor.calls);
        let mut controller = Controller::new(tutor);
        controller.edit("something else");
        controller.quiz().await;

        let mut reference = Controller::new(MockTutor::replying("Q1: ..."));
        reference.submit("quiz").await;

        assert_eq!(
            controller.session().transcript,
            reference.session().transcript
        );
        assert_eq!(*calls.lock().unwrap(), vec!["quiz".to_string()]);
    }

    #[tokio::test]
    async fn it_notifies_subscribers_of_each_change() {
        let mut controller = Controller::new(MockTutor::replying("pong"));
        let mut rx = controller.subscribe();

        controller.edit("ping");
        controller.submit_input().await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(
            events,
            vec![
                SessionEvent::InputChanged("ping".to_string()),
                SessionEvent::InputChanged(String::new()),
                SessionEvent::MessageAppended(Message::user("ping")),
                SessionEvent::BusyChanged(true),
                SessionEvent::MessageAppended(Message::tutor("pong")),
                SessionEvent::BusyChanged(false),
            ]
        );
    }

    #[tokio::test]
    async fn it_drops_closed_subscribers() {
        let mut controller = Controller::new(MockTutor::replying("pong"));
        let rx = controller.subscribe();
        drop(rx);

        controller.submit("ping").await;
        assert!(controller.subscribers.is_empty());
        assert_eq!(controller.session().transcript.len(), 3);
    }
}
