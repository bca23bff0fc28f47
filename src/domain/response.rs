#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed gateway reply.
///
/// Built once from the response body by the transport layer and immutable
/// afterwards. Missing keys are `None`, never an error; `statuscode` of `"1"`
/// is the gateway's only success value.
pub struct GatewayResponse {
    raw: String,
    status_code: Option<String>,
    message_id: Option<String>,
    account_point: Option<String>,
    error: Option<String>,
}

impl GatewayResponse {
    pub(crate) fn from_parts(
        raw: String,
        status_code: Option<String>,
        message_id: Option<String>,
        account_point: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            raw,
            status_code,
            message_id,
            account_point,
            error,
        }
    }

    /// The response body exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The gateway's `statuscode` value, if present.
    pub fn status_code(&self) -> Option<&str> {
        self.status_code.as_deref()
    }

    /// The assigned message id (`msgid`); comma-joined for batch requests.
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// Remaining account point balance (`AccountPoint`).
    pub fn account_point(&self) -> Option<&str> {
        self.account_point.as_deref()
    }

    /// Error description (`Error`), present only on logical failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` iff the gateway reported `statuscode=1`.
    pub fn is_success(&self) -> bool {
        self.status_code.as_deref() == Some("1")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a batch send.
///
/// A batch that fits in one request yields [`BatchResult::Single`]; a split
/// batch yields one response per chunk, in input order.
pub enum BatchResult {
    Single(GatewayResponse),
    Split(Vec<GatewayResponse>),
}

impl BatchResult {
    /// All chunk responses, in input order.
    pub fn responses(&self) -> &[GatewayResponse] {
        match self {
            Self::Single(response) => std::slice::from_ref(response),
            Self::Split(responses) => responses,
        }
    }

    /// Consume into the flat response list.
    pub fn into_vec(self) -> Vec<GatewayResponse> {
        match self {
            Self::Single(response) => vec![response],
            Self::Split(responses) => responses,
        }
    }

    /// `true` iff every chunk reported `statuscode=1`.
    pub fn is_success(&self) -> bool {
        self.responses().iter().all(GatewayResponse::is_success)
    }
}
