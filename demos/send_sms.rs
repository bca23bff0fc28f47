use std::io;

use mitake::{Configuration, Destination, MessageText, MitakeClient, SendOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone_raw = std::env::var("MITAKE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_PHONE environment variable is required",
        )
    })?;
    let message =
        std::env::var("MITAKE_MESSAGE").unwrap_or_else(|_| "Hello from the mitake example.".to_owned());

    // Credentials come from MITAKE_USERNAME / MITAKE_PASSWORD.
    let client = MitakeClient::new(Configuration::from_env())?;
    let to = Destination::new(phone_raw)?;
    let text = MessageText::new(message)?;

    let response = client.send_sms(to, text, SendOptions::default()).await?;
    println!(
        "success: {}, msgid: {:?}, account point: {:?}, error: {:?}",
        response.is_success(),
        response.message_id(),
        response.account_point(),
        response.error()
    );

    Ok(())
}
