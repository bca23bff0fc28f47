//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AdvancedMessage, BatchOptions, MAX_MESSAGES_PER_REQUEST, Message, SendOptions, SendSms,
};
pub use response::{BatchResult, GatewayResponse};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, Charset, ClientId, Destination, Destname, MessageText, PhoneNumber, ScheduleTime,
};
