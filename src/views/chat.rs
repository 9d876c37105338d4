use crate::api;
use crate::handler::{self, ChatSurface, SubmitTrigger};
use crate::types::{ChatLog, Message, Sender};
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Ties each in-flight request to its log lines. Submissions are otherwise
/// untracked: overlapping requests run concurrently and their replies
/// append in arrival order.
static SUBMISSION_SEQ: AtomicU64 = AtomicU64::new(1);

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

/// [`ChatSurface`] over the view's signals. Appending a message renders a
/// new log node; the view's scroll effect then pins the log to it.
#[derive(Clone, Copy)]
struct SignalSurface {
    log: Signal<ChatLog>,
    input: Signal<String>,
}

impl ChatSurface for SignalSurface {
    fn input_value(&self) -> String {
        (self.input)()
    }

    fn clear_input(&mut self) {
        self.input.set(String::new());
    }

    fn append_message(&mut self, message: Message) {
        self.log.with_mut(|log| log.push(message));
    }
}

/// Scrolls the log container to its full scrollable height.
fn scroll_log_to_bottom() {
    let _ = document::eval(
        r#"
        const chatBox = document.getElementById("chat-box");
        if (chatBox) { chatBox.scrollTop = chatBox.scrollHeight; }
        "#,
    );
}

#[component]
pub fn ChatView() -> Element {
    let log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);

    // Runs after every append, once the new node is in the document.
    use_effect(move || {
        let _ = log.read().len();
        scroll_log_to_bottom();
    });

    let submit = move |trigger: SubmitTrigger| {
        let mut surface = SignalSurface { log, input };
        let Some(question) = handler::handle_submit(trigger, &mut surface) else {
            return;
        };

        let submission = SUBMISSION_SEQ.fetch_add(1, Ordering::Relaxed);
        tracing::info!(submission, "sending pergunta");

        spawn(async move {
            let outcome = api::ask(&question).await;
            tracing::debug!(submission, ok = outcome.is_ok(), "pergunta finished");
            let mut surface = SignalSurface { log, input };
            surface.append_message(handler::reply_message(outcome));
        });
    };

    let log_snapshot = log();

    rsx! {
        div { class: "main-container",
            div { id: "chat-box", class: "chat-box",
                for msg in log_snapshot.messages().iter() {
                    MessageRow { message: msg.clone() }
                }
            }
            div { class: "composer",
                input {
                    id: "user-input",
                    r#type: "text",
                    placeholder: "Digite sua pergunta...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        let key = ev.key().to_string();
                        if key == "Enter" {
                            ev.prevent_default();
                        }
                        submit(SubmitTrigger::Key(key));
                    },
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary send-button",
                    r#type: "button",
                    onclick: move |_| submit(SubmitTrigger::Click),
                    "Enviar"
                }
            }
        }
    }
}

/// One log node: `div.message` plus the sender-specific class, text rendered
/// as a text node so message content is never interpreted as markup.
#[component]
fn MessageRow(message: Message) -> Element {
    let sender_class = match message.sender {
        Sender::User => "user-message",
        Sender::Bot => "bot-message",
    };

    rsx! {
        div { class: "message {sender_class}",
            "{message.text}"
            if let Some(ts) = format_message_timestamp(message.sent_at) {
                span { class: "message-timestamp", "{ts}" }
            }
        }
    }
}

fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}
