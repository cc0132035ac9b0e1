//! Pure session state transitions. Nothing in here performs IO; the
//! controller runs the returned effect and feeds the outcome back in.
use super::models::{CONNECTION_ERROR_NOTICE, Message, Transcript};
use crate::service::TransportError;

/// Everything a conversation needs to render itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub transcript: Transcript,
    pub input: String,
    pub busy: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            transcript: Transcript::with_greeting(),
            input: String::new(),
            busy: false,
        }
    }
}

#[derive(Debug)]
pub enum Action {
    /// Replace the input buffer
    Edit(String),
    Submit(String),
    ReplyReceived(String),
    ReplyFailed(TransportError),
}

/// Work the caller must perform after a transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Send this text to the tutoring service
    Send(String),
}

pub fn update(mut session: Session, action: Action) -> (Session, Option<Effect>) {
    match action {
        Action::Edit(text) => {
            session.input = text;
            (session, None)
        }
        Action::Submit(text) => {
            if text.trim().is_empty() {
                return (session, None);
            }
            session.transcript.push(Message::user(&text));
            session.input.clear();
            session.busy = true;
            (session, Some(Effect::Send(text)))
        }
        Action::ReplyReceived(reply) => {
            session.transcript.push(Message::tutor(&reply));
            session.busy = false;
            (session, None)
        }
        Action::ReplyFailed(_) => {
            session.transcript.push(Message::tutor(CONNECTION_ERROR_NOTICE));
            session.busy = false;
            (session, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::{GREETING, Sender};

    #[test]
    fn it_initializes_with_greeting_and_idle() {
        let session = Session::default();
        assert_eq!(session.transcript.len(), 1);
        assert_eq!(session.transcript.messages()[0].text(), GREETING);
        assert_eq!(session.input, "");
        assert!(!session.busy);
    }

    #[test]
    fn it_ignores_blank_submissions() {
        for text in ["", "   ", "\n\t"] {
            let (session, _) = update(Session::default(), Action::Edit("draft".to_string()));
            let before = session.clone();
            let (after, effect) = update(session, Action::Submit(text.to_string()));
            assert_eq!(after, before);
            assert!(effect.is_none());
        }
    }

    #[test]
    fn it_appends_user_message_and_requests_send() {
        let (session, _) = update(Session::default(), Action::Edit("  hi  ".to_string()));
        let (session, effect) = update(session, Action::Submit("  hi  ".to_string()));

        assert_eq!(effect, Some(Effect::Send("  hi  ".to_string())));
        assert_eq!(session.transcript.len(), 2);
        // The literal text is kept, surrounding whitespace included
        assert_eq!(session.transcript.last(), Some(&Message::user("  hi  ")));
        assert_eq!(session.input, "");
        assert!(session.busy);
    }

    #[test]
    fn it_appends_reply_and_clears_busy() {
        let (session, _) = update(Session::default(), Action::Submit("q".to_string()));
        let (session, effect) = update(session, Action::ReplyReceived("a".to_string()));

        assert!(effect.is_none());
        assert!(!session.busy);
        assert_eq!(session.transcript.len(), 3);
        assert_eq!(session.transcript.last(), Some(&Message::tutor("a")));
    }

    #[test]
    fn it_treats_every_failure_kind_the_same() {
        let (submitted, _) = update(Session::default(), Action::Submit("q".to_string()));
        let failures = [
            TransportError::Request("connection refused".to_string()),
            TransportError::Status(404),
            TransportError::Decode("missing field `reply`".to_string()),
        ];

        let sessions: Vec<Session> = failures
            .into_iter()
            .map(|err| update(submitted.clone(), Action::ReplyFailed(err)).0)
            .collect();
        assert!(sessions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn it_appends_notice_on_failure() {
        let (session, _) = update(Session::default(), Action::Submit("q".to_string()));
        let (session, _) = update(session, Action::ReplyFailed(TransportError::Status(500)));

        assert!(!session.busy);
        let last = session.transcript.last().unwrap();
        assert_eq!(last.sender(), Sender::Tutor);
        assert_eq!(last.text(), CONNECTION_ERROR_NOTICE);
    }
}
