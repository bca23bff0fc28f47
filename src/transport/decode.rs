use crate::domain::GatewayResponse;

/// Decode the gateway's flat `key=value` reply.
///
/// The body is split on newlines, each non-empty line on the first `=`. Lines
/// without a `=` are skipped and the last occurrence of a duplicate key wins.
/// Decoding never fails; a body with no recognized keys yields a response with
/// every field absent (and therefore `is_success() == false`).
pub fn decode_gateway_response(body: &str) -> GatewayResponse {
    let mut status_code = None;
    let mut message_id = None;
    let mut account_point = None;
    let mut error = None;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key {
            "statuscode" => status_code = Some(value.to_owned()),
            "msgid" => message_id = Some(value.to_owned()),
            "AccountPoint" => account_point = Some(value.to_owned()),
            "Error" => error = Some(value.to_owned()),
            _ => {}
        }
    }

    GatewayResponse::from_parts(body.to_owned(), status_code, message_id, account_point, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_reply_round_trips() {
        let response = decode_gateway_response("statuscode=1\nmsgid=123\nAccountPoint=50");
        assert!(response.is_success());
        assert_eq!(response.status_code(), Some("1"));
        assert_eq!(response.message_id(), Some("123"));
        assert_eq!(response.account_point(), Some("50"));
        assert_eq!(response.error(), None);
        assert_eq!(response.raw(), "statuscode=1\nmsgid=123\nAccountPoint=50");
    }

    #[test]
    fn failed_reply_carries_error_text() {
        let response = decode_gateway_response("statuscode=0\nError=bad creds");
        assert!(!response.is_success());
        assert_eq!(response.error(), Some("bad creds"));
        assert_eq!(response.message_id(), None);
        assert_eq!(response.account_point(), None);
    }

    #[test]
    fn only_literal_one_counts_as_success() {
        assert!(!decode_gateway_response("statuscode=0").is_success());
        assert!(!decode_gateway_response("statuscode=10").is_success());
        assert!(!decode_gateway_response("statuscode= 1").is_success());
        assert!(decode_gateway_response("statuscode=1").is_success());
    }

    #[test]
    fn unrecognized_body_yields_all_fields_absent() {
        let response = decode_gateway_response("<html>gateway down</html>");
        assert!(!response.is_success());
        assert_eq!(response.status_code(), None);
        assert_eq!(response.message_id(), None);
        assert_eq!(response.account_point(), None);
        assert_eq!(response.error(), None);
        assert_eq!(response.raw(), "<html>gateway down</html>");
    }

    #[test]
    fn last_duplicate_key_wins() {
        let response = decode_gateway_response("msgid=1\nmsgid=2");
        assert_eq!(response.message_id(), Some("2"));
    }

    #[test]
    fn values_may_contain_equals_signs() {
        let response = decode_gateway_response("Error=param dstaddr=missing");
        assert_eq!(response.error(), Some("param dstaddr=missing"));
    }

    #[test]
    fn blank_lines_and_crlf_endings_are_tolerated() {
        let response = decode_gateway_response("statuscode=1\r\n\r\nmsgid=7\r\n");
        assert!(response.is_success());
        assert_eq!(response.message_id(), Some("7"));
    }

    #[test]
    fn empty_body_is_a_logical_failure() {
        let response = decode_gateway_response("");
        assert!(!response.is_success());
        assert_eq!(response.raw(), "");
    }
}
