use crate::domain::value::{
    CallbackUrl, Charset, ClientId, Destination, Destname, MessageText, ScheduleTime,
};

/// Hard cap the gateway enforces on messages per bulk request. Larger inputs
/// are split into consecutive chunks of at most this size.
pub const MAX_MESSAGES_PER_REQUEST: usize = 500;

#[derive(Debug, Clone, Default)]
/// Options for [`send_sms`](crate::MitakeClient::send_sms).
///
/// Every recognized option is an explicit field; absent options are simply not
/// transmitted.
pub struct SendOptions {
    /// Recipient display name or integration key.
    pub destname: Option<Destname>,
    /// Delivery-report callback URL.
    pub callback_url: Option<CallbackUrl>,
    /// Correlation id tying the message to its delivery report.
    pub client_id: Option<ClientId>,
    /// Charset indicator, sent as the `CharsetURL` query parameter.
    pub charset: Charset,
}

#[derive(Debug, Clone, Default)]
/// Options shared by all messages of a batch request.
pub struct BatchOptions {
    /// Charset indicator, sent as the `Encoding_PostIn` form field.
    pub charset: Charset,
}

#[derive(Debug, Clone)]
/// A single-send request (`SmSend`).
pub struct SendSms {
    to: Destination,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn new(to: Destination, text: MessageText, options: SendOptions) -> Self {
        Self { to, text, options }
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// One line of a simple batch request (`SmBulkSend`), serialized as `to:text`.
pub struct Message {
    to: Destination,
    text: MessageText,
}

impl Message {
    pub fn new(to: Destination, text: MessageText) -> Self {
        Self { to, text }
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone)]
/// One record of an advanced batch request (`SmPost`), serialized as seven
/// `$$`-delimited fields.
///
/// A missing or empty correlation id is replaced with a generated one at
/// serialization time; other absent fields serialize as empty strings.
pub struct AdvancedMessage {
    to: Destination,
    text: MessageText,
    client_id: Option<ClientId>,
    delivery_time: Option<ScheduleTime>,
    valid_until: Option<ScheduleTime>,
    destname: Option<Destname>,
    callback_url: Option<CallbackUrl>,
}

impl AdvancedMessage {
    pub fn new(to: Destination, text: MessageText) -> Self {
        Self {
            to,
            text,
            client_id: None,
            delivery_time: None,
            valid_until: None,
            destname: None,
            callback_url: None,
        }
    }

    /// Set the caller-assigned correlation id.
    pub fn with_client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Schedule delivery at the given time instead of sending immediately.
    pub fn with_delivery_time(mut self, delivery_time: ScheduleTime) -> Self {
        self.delivery_time = Some(delivery_time);
        self
    }

    /// Expire the message if not delivered by the given time.
    pub fn with_valid_until(mut self, valid_until: ScheduleTime) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    /// Set the recipient display name.
    pub fn with_destname(mut self, destname: Destname) -> Self {
        self.destname = Some(destname);
        self
    }

    /// Set the delivery-report callback URL.
    pub fn with_callback_url(mut self, callback_url: CallbackUrl) -> Self {
        self.callback_url = Some(callback_url);
        self
    }

    pub fn to(&self) -> &Destination {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    pub fn delivery_time(&self) -> Option<&ScheduleTime> {
        self.delivery_time.as_ref()
    }

    pub fn valid_until(&self) -> Option<&ScheduleTime> {
        self.valid_until.as_ref()
    }

    pub fn destname(&self) -> Option<&Destname> {
        self.destname.as_ref()
    }

    pub fn callback_url(&self) -> Option<&CallbackUrl> {
        self.callback_url.as_ref()
    }
}
