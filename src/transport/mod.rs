//! Transport layer: wire-format details for the Mitake endpoints.

mod advanced_send;
mod bulk_send;
mod decode;
mod send_sms;

pub use advanced_send::encode_advanced_data;
pub use bulk_send::encode_bulk_body;
pub use decode::decode_gateway_response;
pub use send_sms::{encode_send_sms_form, encode_send_sms_query};

// The gateway cannot carry raw newlines inside a message field; each `\n`
// becomes a single 0x06 (ACK) byte on the wire.
pub(crate) fn replace_newlines(text: &str) -> String {
    text.replace('\n', "\u{0006}")
}

#[cfg(test)]
mod tests {
    use super::replace_newlines;

    #[test]
    fn every_newline_becomes_the_ack_byte() {
        let encoded = replace_newlines("line one\nline two\nline three");
        assert_eq!(encoded, "line one\u{0006}line two\u{0006}line three");
        assert!(!encoded.contains('\n'));
    }

    #[test]
    fn text_without_newlines_is_unchanged() {
        assert_eq!(replace_newlines("plain"), "plain");
    }
}
