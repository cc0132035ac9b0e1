use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io;
use tracing::Instrument;
use uuid::Uuid;

use super::view::View;
use crate::chat::{self, Controller, ConversationHandle, HandleError, Session};
use crate::core::AppConfig;
use crate::service::HttpTutorService;

const QUIZ_COMMAND: &str = "/quiz";

fn is_exit(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

async fn dispatch(handle: &ConversationHandle, line: &str) -> Result<Session, HandleError> {
    if line.trim() == QUIZ_COMMAND {
        handle.quiz().await
    } else {
        handle.edit(line).await?;
        handle.submit_input().await
    }
}

async fn repl(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let service = HttpTutorService::from_config(&config);
    let mut controller = Controller::new(service);
    let mut events = controller.subscribe();

    let mut view = View::new(io::stdout());
    view.render_transcript(&controller.session().transcript)?;
    println!("(type {} to take a quiz, quit to stop)", QUIZ_COMMAND);

    let (handle, worker) = chat::spawn(controller);

    loop {
        let readline = rl.readline("You: ");
        match readline {
            Ok(line) => {
                if is_exit(&line) {
                    break;
                }
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }

                // Keep drawing while the reply is outstanding so the
                // thinking indicator shows up before the answer does
                let pending = dispatch(&handle, &line);
                tokio::pin!(pending);
                loop {
                    tokio::select! {
                        Some(event) = events.recv() => view.render(&event)?,
                        result = &mut pending => {
                            result?;
                            break;
                        }
                    }
                }
                while let Ok(event) = events.try_recv() {
                    view.render(&event)?;
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    drop(handle);
    worker.await?;

    Ok(())
}

pub async fn run(config: AppConfig) -> Result<()> {
    let session_id = Uuid::new_v4();
    tracing::info!("Starting chat session {}", session_id);
    repl(config)
        .instrument(tracing::info_span!("session", id = %session_id))
        .await
}
