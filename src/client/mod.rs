//! Client layer: orchestrates transport calls and maps HTTP status to errors.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use crate::config::Configuration;
use crate::domain::{
    AdvancedMessage, BatchOptions, BatchResult, Charset, Destination, GatewayResponse,
    MAX_MESSAGES_PER_REQUEST, Message, MessageText, SendOptions, SendSms, ValidationError,
};
use crate::transport;

const SEND_ENDPOINT: &str = "SmSend";
const BULK_ENDPOINT: &str = "SmBulkSend";
const ADVANCED_ENDPOINT: &str = "SmPost";

/// Form field carrying the `$$`-joined records on the advanced endpoint.
const ADVANCED_DATA_FIELD: &str = "data";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        form: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
        form: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .query(&query)
                .form(&form)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MitakeClient`].
///
/// HTTP-level failures map onto the gateway's documented status taxonomy;
/// transport failures (DNS, TLS, timeouts) pass through untranslated as
/// [`MitakeError::Transport`]. A `200` reply is never an error here, even when
/// the gateway signals a logical failure — that is surfaced through
/// [`GatewayResponse::is_success`] and [`GatewayResponse::error`].
pub enum MitakeError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway rejected the credentials (HTTP 401).
    #[error("invalid username or password")]
    Authentication,

    /// The gateway rejected the request parameters (HTTP 400).
    #[error("invalid request parameters")]
    InvalidRequest,

    /// The gateway failed internally (HTTP 500-599).
    #[error("server error: {status}")]
    Server { status: u16 },

    /// Any other non-200 HTTP status.
    #[error("unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The configured base URL does not parse or cannot be joined with an
    /// endpoint path.
    #[error("invalid api base url: {0}")]
    BaseUrl(#[source] url::ParseError),

    /// One of the domain constructors or limits rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`MitakeClient`].
///
/// Timeouts and the base URL come from [`Configuration`]; the builder only
/// adds HTTP-client concerns on top.
pub struct MitakeClientBuilder {
    config: Configuration,
    user_agent: Option<String>,
}

impl MitakeClientBuilder {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            user_agent: None,
        }
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MitakeClient`].
    pub fn build(self) -> Result<MitakeClient, MitakeError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .connect_timeout(self.config.open_timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MitakeError::Transport(Box::new(err)))?;

        Ok(MitakeClient {
            config: self.config,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Mitake gateway client.
///
/// Owns an HTTP handle built from an explicit [`Configuration`] and exposes
/// the three send modes the gateway offers: single (`SmSend`), batch
/// (`SmBulkSend`), and advanced batch (`SmPost`). All calls are synchronous
/// from the gateway's point of view: split batches go out one chunk at a
/// time, in order, and the first failing chunk aborts the rest.
pub struct MitakeClient {
    config: Configuration,
    http: Arc<dyn HttpTransport>,
}

impl MitakeClient {
    /// Create a client from the given configuration.
    pub fn new(config: Configuration) -> Result<Self, MitakeError> {
        MitakeClientBuilder::new(config).build()
    }

    /// Start building a client with custom HTTP settings.
    pub fn builder(config: Configuration) -> MitakeClientBuilder {
        MitakeClientBuilder::new(config)
    }

    /// Send a single SMS through the `SmSend` endpoint.
    pub async fn send_sms(
        &self,
        to: Destination,
        text: MessageText,
        options: SendOptions,
    ) -> Result<GatewayResponse, MitakeError> {
        let request = SendSms::new(to, text, options);
        let query = transport::encode_send_sms_query(&request);

        let mut form = Vec::<(String, String)>::new();
        self.config.push_credentials(&mut form);
        form.extend(transport::encode_send_sms_form(&request));

        self.post(SEND_ENDPOINT, query, form).await
    }

    /// Send a batch of messages through the `SmBulkSend` endpoint, splitting
    /// into requests of at most 500 messages.
    pub async fn batch_send(
        &self,
        messages: &[Message],
        options: &BatchOptions,
    ) -> Result<BatchResult, MitakeError> {
        self.batch_send_with_limit(messages, MAX_MESSAGES_PER_REQUEST, options)
            .await
    }

    /// Like [`batch_send`](Self::batch_send) with an explicit per-request
    /// limit (`1..=500`).
    ///
    /// `ceil(N / limit)` requests go out sequentially, preserving input order
    /// across chunk boundaries. An empty batch still issues exactly one
    /// request with an empty message field. A failing chunk aborts the
    /// remaining chunks.
    pub async fn batch_send_with_limit(
        &self,
        messages: &[Message],
        limit: usize,
        options: &BatchOptions,
    ) -> Result<BatchResult, MitakeError> {
        validate_limit(limit)?;

        if messages.len() <= limit {
            let response = self.send_bulk_chunk(messages, options).await?;
            return Ok(BatchResult::Single(response));
        }

        let mut responses = Vec::with_capacity(messages.len().div_ceil(limit));
        for chunk in messages.chunks(limit) {
            responses.push(self.send_bulk_chunk(chunk, options).await?);
        }
        Ok(BatchResult::Split(responses))
    }

    /// Send a batch of extended-format messages through the `SmPost`
    /// endpoint, splitting into requests of at most 500 messages.
    pub async fn advanced_batch_send(
        &self,
        messages: &[AdvancedMessage],
        options: &BatchOptions,
    ) -> Result<BatchResult, MitakeError> {
        self.advanced_batch_send_with_limit(messages, MAX_MESSAGES_PER_REQUEST, options)
            .await
    }

    /// Like [`advanced_batch_send`](Self::advanced_batch_send) with an
    /// explicit per-request limit (`1..=500`). Same splitting and failure
    /// contract as [`batch_send_with_limit`](Self::batch_send_with_limit).
    pub async fn advanced_batch_send_with_limit(
        &self,
        messages: &[AdvancedMessage],
        limit: usize,
        options: &BatchOptions,
    ) -> Result<BatchResult, MitakeError> {
        validate_limit(limit)?;

        if messages.len() <= limit {
            let response = self.send_advanced_chunk(messages, options).await?;
            return Ok(BatchResult::Single(response));
        }

        let mut responses = Vec::with_capacity(messages.len().div_ceil(limit));
        for chunk in messages.chunks(limit) {
            responses.push(self.send_advanced_chunk(chunk, options).await?);
        }
        Ok(BatchResult::Split(responses))
    }

    async fn send_bulk_chunk(
        &self,
        chunk: &[Message],
        options: &BatchOptions,
    ) -> Result<GatewayResponse, MitakeError> {
        let mut form = Vec::<(String, String)>::new();
        self.config.push_credentials(&mut form);
        form.push((
            Charset::BULK_FIELD.to_owned(),
            options.charset.as_str().to_owned(),
        ));
        form.push((
            MessageText::FIELD.to_owned(),
            transport::encode_bulk_body(chunk),
        ));

        self.post(BULK_ENDPOINT, Vec::new(), form).await
    }

    async fn send_advanced_chunk(
        &self,
        chunk: &[AdvancedMessage],
        options: &BatchOptions,
    ) -> Result<GatewayResponse, MitakeError> {
        let mut form = Vec::<(String, String)>::new();
        self.config.push_credentials(&mut form);
        form.push((
            Charset::BULK_FIELD.to_owned(),
            options.charset.as_str().to_owned(),
        ));
        form.push((
            ADVANCED_DATA_FIELD.to_owned(),
            transport::encode_advanced_data(chunk),
        ));

        self.post(ADVANCED_ENDPOINT, Vec::new(), form).await
    }

    async fn post(
        &self,
        endpoint: &'static str,
        query: Vec<(String, String)>,
        form: Vec<(String, String)>,
    ) -> Result<GatewayResponse, MitakeError> {
        let url = self.endpoint_url(endpoint)?;
        debug!(endpoint, "posting to gateway");

        let response = self
            .http
            .post_form(&url, query, form)
            .await
            .map_err(MitakeError::Transport)?;

        match response.status {
            200 => {
                let parsed = transport::decode_gateway_response(&response.body);
                debug!(endpoint, success = parsed.is_success(), "gateway replied");
                Ok(parsed)
            }
            401 => Err(MitakeError::Authentication),
            400 => Err(MitakeError::InvalidRequest),
            status @ 500..=599 => Err(MitakeError::Server { status }),
            status => Err(MitakeError::UnexpectedStatus { status }),
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String, MitakeError> {
        let base = url::Url::parse(&self.config.api_base_url).map_err(MitakeError::BaseUrl)?;
        let joined = base.join(endpoint).map_err(MitakeError::BaseUrl)?;
        Ok(joined.into())
    }
}

fn validate_limit(limit: usize) -> Result<(), ValidationError> {
    if limit == 0 || limit > MAX_MESSAGES_PER_REQUEST {
        return Err(ValidationError::LimitOutOfRange {
            max: MAX_MESSAGES_PER_REQUEST,
            actual: limit,
        });
    }
    Ok(())
}
