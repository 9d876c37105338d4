use crate::api::AskError;
use crate::types::Message;

/// Fixed reply rendered for any request failure.
pub const FALLBACK_REPLY: &str = "Desculpe, houve um erro. Tente novamente.";

/// The user action that reached the input handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// A key press on the input field, carrying the key identifier.
    Key(String),
    /// A click on the send control.
    Click,
}

impl SubmitTrigger {
    /// Only the Enter key and the send control submit.
    fn submits(&self) -> bool {
        match self {
            SubmitTrigger::Click => true,
            SubmitTrigger::Key(key) => key.as_str() == "Enter",
        }
    }
}

/// The slice of the rendering environment the handler touches.
///
/// The chat view implements this over its signals; tests implement it over
/// a plain struct, so the submission rules run without a webview.
pub trait ChatSurface {
    /// Current value of the input field.
    fn input_value(&self) -> String;
    /// Reset the input field to the empty string.
    fn clear_input(&mut self);
    /// Render one message as the newest log entry.
    fn append_message(&mut self, message: Message);
}

/// Runs one submission attempt against the surface.
///
/// Returns the question to send, or `None` when the trigger does not submit
/// or the trimmed input is empty. In both `None` cases the surface is left
/// untouched — no message appended, input field not cleared.
pub fn handle_submit(trigger: SubmitTrigger, surface: &mut impl ChatSurface) -> Option<String> {
    if !trigger.submits() {
        return None;
    }

    let question = surface.input_value().trim().to_string();
    if question.is_empty() {
        return None;
    }

    surface.append_message(Message::user(question.clone()));
    surface.clear_input();
    Some(question)
}

/// Maps a finished request to the bot message to render.
///
/// Every failure collapses to the same fallback reply; the cause goes to
/// the diagnostic log only.
pub fn reply_message(outcome: Result<String, AskError>) -> Message {
    match outcome {
        Ok(resposta) => Message::bot(resposta),
        Err(err) => {
            tracing::error!(error = %err, "pergunta request failed");
            Message::bot(FALLBACK_REPLY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitTrigger;

    #[test]
    fn only_enter_and_click_submit() {
        assert!(SubmitTrigger::Click.submits());
        assert!(SubmitTrigger::Key("Enter".into()).submits());
        assert!(!SubmitTrigger::Key("Escape".into()).submits());
        assert!(!SubmitTrigger::Key("a".into()).submits());
        assert!(!SubmitTrigger::Key(String::new()).submits());
    }
}
