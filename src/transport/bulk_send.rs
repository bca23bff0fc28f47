use crate::domain::Message;
use crate::transport::replace_newlines;

/// Body of the `smbody` form field for the `SmBulkSend` endpoint: one
/// `to:text` line per message, joined with `\n`. Newlines inside a message
/// text are substituted first so line boundaries stay unambiguous. An empty
/// batch encodes to an empty string.
pub fn encode_bulk_body(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "{}:{}",
                message.to().as_str(),
                replace_newlines(message.text().as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use crate::domain::{Destination, MessageText};

    use super::*;

    fn message(to: &str, text: &str) -> Message {
        Message::new(
            Destination::new(to).unwrap(),
            MessageText::new(text).unwrap(),
        )
    }

    #[test]
    fn messages_become_colon_delimited_lines() {
        let body = encode_bulk_body(&[
            message("0912345678", "Message 1"),
            message("0922333444", "Message 2"),
        ]);
        assert_eq!(body, "0912345678:Message 1\n0922333444:Message 2");
    }

    #[test]
    fn embedded_newlines_are_substituted_per_message() {
        let body = encode_bulk_body(&[
            message("0912345678", "First line\nSecond line"),
            message("0922333444", "Another\nmulti-line\nmessage"),
        ]);
        assert_eq!(
            body,
            "0912345678:First line\u{0006}Second line\n0922333444:Another\u{0006}multi-line\u{0006}message"
        );
        assert_eq!(body.matches('\n').count(), 1);
    }

    #[test]
    fn empty_batch_encodes_to_empty_body() {
        assert_eq!(encode_bulk_body(&[]), "");
    }
}
