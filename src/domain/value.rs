use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to Mitake (`dstaddr`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`Destination`].
pub struct Destination(String);

impl Destination {
    /// Form field name used by Mitake (`dstaddr`).
    pub const FIELD: &'static str = "dstaddr";

    /// Create a validated (non-empty) destination.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Mitake.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Destination {
    /// Convert an already-parsed phone number to a normalized destination (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form. Mitake accepts
/// local Taiwanese numbers (`09xxxxxxxx`) as well, so this type is opt-in;
/// [`Destination`] carries whatever the caller provides.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix (e.g. `country::Id::TW` for `0912345678`).
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Destination::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`smbody`).
///
/// Invariant: non-empty after trimming. The original value (including embedded
/// newlines) is preserved; the transport layer substitutes newlines with the
/// 0x06 control byte the gateway expects.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Mitake (`smbody`).
    pub const FIELD: &'static str = "smbody";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient display name or integration key (`destname`).
///
/// Invariant: non-empty after trimming.
pub struct Destname(String);

impl Destname {
    /// Form field name used by Mitake (`destname`).
    pub const FIELD: &'static str = "destname";

    /// Create a validated [`Destname`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report callback URL (`response`).
///
/// Invariant: parses as an absolute URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Form field name used by Mitake (`response`).
    pub const FIELD: &'static str = "response";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Client-assigned correlation id (`clientid`).
///
/// Ties a message to its delivery-report callback. Must be unique per message;
/// use [`ClientId::generate`] when the caller has no id of its own.
///
/// Invariant: non-empty after trimming.
pub struct ClientId(String);

impl ClientId {
    /// Form field name used by Mitake (`clientid`).
    pub const FIELD: &'static str = "clientid";

    /// Create a validated [`ClientId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a fresh correlation id: a millisecond-precision timestamp
    /// (`YYYYMMDDHHMMSSmmm`, 17 digits) and an 8-character lowercase hex
    /// fragment, joined by a hyphen.
    pub fn generate() -> Self {
        let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S%3f");
        let fragment = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{timestamp}-{}", &fragment[..8]))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled delivery or validity-window time, `YYYYMMDDHHMMSS`.
///
/// Invariant: exactly 14 ASCII digits. Used for both `dlvtime` and `vldtime`.
pub struct ScheduleTime(String);

impl ScheduleTime {
    /// Form field name for scheduled delivery (`dlvtime`).
    pub const DELIVERY_FIELD: &'static str = "dlvtime";
    /// Form field name for the validity-window expiry (`vldtime`).
    pub const VALIDITY_FIELD: &'static str = "vldtime";

    /// Create a validated [`ScheduleTime`] from a preformatted string.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 14 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidScheduleTime {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Format a [`chrono::NaiveDateTime`] into the gateway's wire format.
    pub fn from_datetime(value: chrono::NaiveDateTime) -> Self {
        Self(value.format("%Y%m%d%H%M%S").to_string())
    }

    /// Borrow the validated time.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Charset indicator telling the gateway which encoding the message body uses.
///
/// This crate always transmits UTF-8 text; the indicator is configurable so
/// callers targeting legacy routes can announce a different encoding and
/// transcode the body themselves before constructing [`MessageText`].
pub struct Charset(String);

impl Charset {
    /// Query parameter name on the single-send endpoint (`CharsetURL`).
    pub const QUERY_FIELD: &'static str = "CharsetURL";
    /// Form field name on the bulk endpoints (`Encoding_PostIn`).
    pub const BULK_FIELD: &'static str = "Encoding_PostIn";

    /// Create a charset indicator with an arbitrary label.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::QUERY_FIELD,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The default `UTF8` indicator.
    pub fn utf8() -> Self {
        Self("UTF8".to_owned())
    }

    /// The `BIG5` indicator for legacy double-byte routes.
    pub fn big5() -> Self {
        Self("BIG5".to_owned())
    }

    /// Borrow the indicator label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}
