use crate::domain::{
    CallbackUrl, Charset, ClientId, Destination, Destname, MessageText, SendSms,
};
use crate::transport::replace_newlines;

/// Query parameters for the `SmSend` endpoint: only the charset indicator
/// travels in the query string.
pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    vec![(
        Charset::QUERY_FIELD.to_owned(),
        request.options().charset.as_str().to_owned(),
    )]
}

/// Form body for the `SmSend` endpoint. Credentials are pushed separately by
/// the client; optional fields are omitted entirely when absent.
pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    params.push((
        Destination::FIELD.to_owned(),
        request.to().as_str().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        replace_newlines(request.text().as_str()),
    ));

    let options = request.options();
    if let Some(destname) = options.destname.as_ref() {
        params.push((Destname::FIELD.to_owned(), destname.as_str().to_owned()));
    }
    if let Some(callback_url) = options.callback_url.as_ref() {
        params.push((
            CallbackUrl::FIELD.to_owned(),
            callback_url.as_str().to_owned(),
        ));
    }
    if let Some(client_id) = options.client_id.as_ref() {
        params.push((ClientId::FIELD.to_owned(), client_id.as_str().to_owned()));
    }

    params
}
