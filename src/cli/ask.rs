use anyhow::{Result, bail};

use crate::chat::{Controller, Session};
use crate::core::AppConfig;
use crate::service::{HttpTutorService, TutorService};

/// The tutor's answer to the last completed action, if one was added.
fn last_reply(session: &Session, before_len: usize) -> Option<&str> {
    if session.transcript.len() > before_len {
        session.transcript.last().map(|msg| msg.text())
    } else {
        None
    }
}

async fn ask<S: TutorService + Send + Sync>(
    controller: &mut Controller<S>,
    message: &str,
) -> Result<String> {
    let before_len = controller.session().transcript.len();
    controller.submit(message).await;

    match last_reply(controller.session(), before_len) {
        Some(reply) => Ok(reply.to_string()),
        None => bail!("Nothing to send, the message is empty"),
    }
}

pub async fn run(config: AppConfig, message: &str) -> Result<()> {
    let mut controller = Controller::new(HttpTutorService::from_config(&config));
    let reply = ask(&mut controller, message).await?;
    println!("{}", reply);
    Ok(())
}

pub async fn run_quiz(config: AppConfig) -> Result<()> {
    let mut controller = Controller::new(HttpTutorService::from_config(&config));
    controller.quiz().await;
    if let Some(msg) = controller.session().transcript.last() {
        println!("{}", msg.text());
    }
    Ok(())
}
