use time::OffsetDateTime;

/// Who produced a message. Every log entry is one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One chat entry. Lives only in the in-memory log backing the view.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: OffsetDateTime,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::stamped(Sender::User, text.into())
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::stamped(Sender::Bot, text.into())
    }

    fn stamped(sender: Sender, text: String) -> Self {
        Self {
            sender,
            text,
            sent_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Append-only, ordered record of everything rendered into the chat.
///
/// Entries are never merged, reordered, or updated; the log grows for the
/// life of the process.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
