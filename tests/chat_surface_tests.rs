//! Submission rules driven through a plain test surface, no webview.

use duvidas::handler::{self, ChatSurface, FALLBACK_REPLY, SubmitTrigger};
use duvidas::types::{ChatLog, Message, Sender};

#[derive(Default)]
struct TestSurface {
    log: ChatLog,
    input: String,
}

impl TestSurface {
    fn with_input(input: &str) -> Self {
        Self {
            log: ChatLog::default(),
            input: input.to_string(),
        }
    }
}

impl ChatSurface for TestSurface {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_message(&mut self, message: Message) {
        self.log.push(message);
    }
}

fn enter() -> SubmitTrigger {
    SubmitTrigger::Key("Enter".into())
}

mod submission_tests {
    use super::*;

    #[test]
    fn test_empty_input_is_ignored() {
        let mut surface = TestSurface::with_input("");
        assert_eq!(handler::handle_submit(enter(), &mut surface), None);
        assert!(surface.log.is_empty());
        assert_eq!(surface.input, "");
    }

    #[test]
    fn test_whitespace_only_input_is_ignored_and_not_cleared() {
        let mut surface = TestSurface::with_input("   \t ");
        let sent = handler::handle_submit(SubmitTrigger::Click, &mut surface);
        assert_eq!(sent, None);
        assert!(surface.log.is_empty());
        assert_eq!(surface.input, "   \t ");
    }

    #[test]
    fn test_other_keys_do_not_submit() {
        let mut surface = TestSurface::with_input("qual é a média da turma?");
        let sent = handler::handle_submit(SubmitTrigger::Key("a".into()), &mut surface);
        assert_eq!(sent, None);
        assert!(surface.log.is_empty());
        assert_eq!(surface.input, "qual é a média da turma?");
    }

    #[test]
    fn test_enter_appends_trimmed_user_message_and_clears_input() {
        let mut surface = TestSurface::with_input("  qual é a média da turma?  ");
        let sent = handler::handle_submit(enter(), &mut surface);

        assert_eq!(sent.as_deref(), Some("qual é a média da turma?"));
        assert_eq!(surface.input, "");

        let messages = surface.log.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "qual é a média da turma?");
    }

    #[test]
    fn test_click_submits_like_enter() {
        let mut surface = TestSurface::with_input("quem está com dificuldade?");
        let sent = handler::handle_submit(SubmitTrigger::Click, &mut surface);

        assert_eq!(sent.as_deref(), Some("quem está com dificuldade?"));
        assert_eq!(surface.log.len(), 1);
        assert_eq!(surface.input, "");
    }

    #[test]
    fn test_markup_in_input_is_stored_verbatim() {
        // The view inserts message text as a text node; the log must hold
        // the raw string, never a parsed or altered form.
        let mut surface = TestSurface::with_input("<script>alert(1)</script>");
        handler::handle_submit(SubmitTrigger::Click, &mut surface).expect("should submit");
        assert_eq!(surface.log.messages()[0].text, "<script>alert(1)</script>");
    }
}

mod reply_tests {
    use super::*;

    #[test]
    fn test_successful_reply_becomes_bot_message() {
        let message = handler::reply_message(Ok("A média geral é 7,4.".to_string()));
        assert_eq!(message.sender, Sender::Bot);
        assert_eq!(message.text, "A média geral é 7,4.");
    }

    #[test]
    fn test_failed_reply_becomes_fallback_bot_message() {
        let err = serde_json::from_str::<serde_json::Value>("não é json").unwrap_err();
        let message = handler::reply_message(Err(err.into()));
        assert_eq!(message.sender, Sender::Bot);
        assert_eq!(message.text, FALLBACK_REPLY);
    }

    #[test]
    fn test_sequential_submissions_keep_append_order() {
        let mut surface = TestSurface::default();
        for i in 1..=3 {
            surface.input = format!("pergunta {i}");
            handler::handle_submit(enter(), &mut surface).expect("should submit");
            surface.append_message(handler::reply_message(Ok(format!("resposta {i}"))));
        }

        let messages = surface.log.messages();
        assert_eq!(messages.len(), 6);
        for i in 0..3 {
            assert_eq!(messages[2 * i].sender, Sender::User);
            assert_eq!(messages[2 * i].text, format!("pergunta {}", i + 1));
            assert_eq!(messages[2 * i + 1].sender, Sender::Bot);
            assert_eq!(messages[2 * i + 1].text, format!("resposta {}", i + 1));
        }
    }
}
