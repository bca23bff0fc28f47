use crate::domain::{AdvancedMessage, CallbackUrl, ClientId, Destname, ScheduleTime};
use crate::transport::replace_newlines;

/// Value of the `data` form field for the `SmPost` endpoint: one record per
/// message joined with `\n`. Each record is seven `$$`-delimited fields in the
/// order the gateway documents:
///
/// `clientid $$ dstaddr $$ dlvtime $$ vldtime $$ destname $$ response $$ smbody`
///
/// A message without a correlation id gets a generated one; other absent
/// fields serialize as empty strings. An empty batch encodes to an empty
/// string.
pub fn encode_advanced_data(messages: &[AdvancedMessage]) -> String {
    messages
        .iter()
        .map(encode_record)
        .collect::<Vec<_>>()
        .join("\n")
}

fn encode_record(message: &AdvancedMessage) -> String {
    let client_id = message
        .client_id()
        .cloned()
        .unwrap_or_else(ClientId::generate);

    [
        client_id.as_str(),
        message.to().as_str(),
        message
            .delivery_time()
            .map(ScheduleTime::as_str)
            .unwrap_or(""),
        message
            .valid_until()
            .map(ScheduleTime::as_str)
            .unwrap_or(""),
        message.destname().map(Destname::as_str).unwrap_or(""),
        message
            .callback_url()
            .map(CallbackUrl::as_str)
            .unwrap_or(""),
        &replace_newlines(message.text().as_str()),
    ]
    .join("$$")
}

#[cfg(test)]
mod tests {
    use crate::domain::{Destination, MessageText};

    use super::*;

    fn message(to: &str, text: &str) -> AdvancedMessage {
        AdvancedMessage::new(
            Destination::new(to).unwrap(),
            MessageText::new(text).unwrap(),
        )
    }

    fn fields(record: &str) -> Vec<&str> {
        record.split("$$").collect()
    }

    #[test]
    fn record_has_seven_fields_in_gateway_order() {
        let msg = message("0912345678", "hello")
            .with_client_id(ClientId::new("abc").unwrap())
            .with_delivery_time(ScheduleTime::new("20260825120000").unwrap())
            .with_valid_until(ScheduleTime::new("20260825180000").unwrap())
            .with_destname(Destname::new("Alice").unwrap())
            .with_callback_url(CallbackUrl::new("https://example.com/dlr").unwrap());

        let data = encode_advanced_data(&[msg]);
        assert_eq!(
            fields(&data),
            vec![
                "abc",
                "0912345678",
                "20260825120000",
                "20260825180000",
                "Alice",
                "https://example.com/dlr",
                "hello",
            ]
        );
    }

    #[test]
    fn absent_optional_fields_serialize_as_empty_strings() {
        let data = encode_advanced_data(&[message("0912345678", "hello")
            .with_client_id(ClientId::new("abc").unwrap())]);
        assert_eq!(
            fields(&data),
            vec!["abc", "0912345678", "", "", "", "", "hello"]
        );
    }

    #[test]
    fn explicit_client_id_is_never_replaced() {
        let data = encode_advanced_data(&[
            message("0912345678", "hello").with_client_id(ClientId::new("abc").unwrap())
        ]);
        assert!(data.starts_with("abc$$"));
    }

    #[test]
    fn missing_client_id_gets_a_generated_one() {
        let data = encode_advanced_data(&[message("0912345678", "hello")]);
        let generated = fields(&data)[0];

        let (timestamp, fragment) = generated.split_once('-').expect("hyphen separator");
        assert_eq!(timestamp.len(), 17);
        assert!(timestamp.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(fragment.len(), 8);
        assert!(
            fragment
                .bytes()
                .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
        );
    }

    #[test]
    fn records_are_newline_joined_and_texts_substituted() {
        let data = encode_advanced_data(&[
            message("0912345678", "First line\nSecond line")
                .with_client_id(ClientId::new("a").unwrap()),
            message("0922333444", "plain").with_client_id(ClientId::new("b").unwrap()),
        ]);
        assert_eq!(
            data,
            "a$$0912345678$$$$$$$$$$First line\u{0006}Second line\nb$$0922333444$$$$$$$$$$plain"
        );
    }

    #[test]
    fn empty_batch_encodes_to_empty_data() {
        assert_eq!(encode_advanced_data(&[]), "");
    }
}
