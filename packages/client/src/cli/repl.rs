//! Interactive session driving a [`ConnectionController`].

use rustyline::{DefaultEditor, error::ReadlineError};

use super::{
    command::{Command, HELP, parse_command},
    render::{render_entries, render_status},
};
use crate::{
    controller::{ConnectionController, ControllerError, NextStage},
    error::ClientError,
    store::AssociationStore,
};

/// What the session loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The user connected a method and moved on
    Proceeded,
    Quit,
}

/// Apply one command to the controller and return the text to print
pub async fn execute<S: AssociationStore>(
    controller: &mut ConnectionController<S>,
    command: Command,
) -> (Flow, String) {
    let outcome: Result<Option<String>, ControllerError> = match command {
        Command::Help => Ok(Some(HELP.to_string())),
        Command::Quit => return (Flow::Quit, String::new()),
        Command::List => Ok(None),
        Command::Select(id) => controller.select(&id).map(|_| None),
        Command::Address(text) => controller.edit_address(text).map(|_| None),
        Command::Submit => controller.submit().await.map(|_| None),
        Command::Disconnect => controller.disconnect().await.map(|_| None),
        Command::Refresh => controller.load().await.map(|_| None),
        Command::Proceed => match controller.proceed() {
            Ok(NextStage::Verify { association }) => {
                let method = association
                    .method_id()
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                return (
                    Flow::Proceeded,
                    format!("Payment method '{method}' confirmed. Continuing to verification."),
                );
            }
            Err(e) => Err(e),
        },
    };

    let state = controller.state();
    let mut out = match outcome {
        Ok(Some(text)) => return (Flow::Continue, text),
        Ok(None) => String::new(),
        // store failures are shown by render_status through last_error
        Err(ControllerError::Store(_)) => String::new(),
        Err(e) => format!("  ! {e}\n"),
    };
    out.push_str(&render_entries(state));
    out.push_str(&render_status(state));
    (Flow::Continue, out)
}

/// Read commands until the user quits or proceeds
pub async fn run_session<S: AssociationStore>(
    mut controller: ConnectionController<S>,
) -> Result<Flow, ClientError> {
    let mut editor = DefaultEditor::new()?;

    if let Err(e) = controller.load().await {
        tracing::warn!("Initial load failed: {}", e);
    }
    println!("{}", render_entries(controller.state()));
    print!("{}", render_status(controller.state()));
    println!("Type 'help' for commands.");

    loop {
        let prompt = format!("paylink[{}]> ", controller.state().phase().name());
        // readline blocks; keep it off the async worker's critical path
        let line = tokio::task::block_in_place(|| editor.readline(&prompt));
        let line = match line {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(Flow::Quit),
            Err(e) => return Err(e.into()),
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("  ! {message}");
                continue;
            }
        };
        let _ = editor.add_history_entry(line.as_str());

        let (flow, out) = execute(&mut controller, command).await;
        if !out.is_empty() {
            println!("{}", out.trim_end());
        }
        if flow != Flow::Continue {
            return Ok(flow);
        }
    }
}
