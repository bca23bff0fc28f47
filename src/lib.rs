//! Typed Rust client for the Mitake SMS HTTP API.
//!
//! The design follows three layers: a domain layer of strong types, a
//! transport layer for the gateway's wire-format quirks (colon-delimited bulk
//! lines, `$$`-delimited advanced records, the flat `key=value` reply), and a
//! small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use mitake::{Configuration, Destination, MessageText, MitakeClient, SendOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mitake::MitakeError> {
//!     let client = MitakeClient::new(Configuration::new("username", "password"))?;
//!     let to = Destination::new("0912345678")?;
//!     let text = MessageText::new("hello")?;
//!     let response = client.send_sms(to, text, SendOptions::default()).await?;
//!     assert!(response.is_success());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{MitakeClient, MitakeClientBuilder, MitakeError};
pub use config::{
    Configuration, DEFAULT_API_BASE_URL, DEFAULT_OPEN_TIMEOUT, DEFAULT_TIMEOUT, PASSWORD_ENV,
    USERNAME_ENV,
};
pub use domain::{
    AdvancedMessage, BatchOptions, BatchResult, CallbackUrl, Charset, ClientId, Destination,
    Destname, GatewayResponse, MAX_MESSAGES_PER_REQUEST, Message, MessageText, PhoneNumber,
    ScheduleTime, SendOptions, SendSms, ValidationError,
};
