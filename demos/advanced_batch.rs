use std::io;

use mitake::{
    AdvancedMessage, BatchOptions, Configuration, Destination, MessageText, MitakeClient,
    ScheduleTime,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone_raw = std::env::var("MITAKE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MITAKE_PHONE environment variable is required",
        )
    })?;

    let client = MitakeClient::new(Configuration::from_env())?;
    let to = Destination::new(phone_raw)?;

    // Correlation ids are generated automatically when omitted.
    let batch = vec![
        AdvancedMessage::new(to.clone(), MessageText::new("First message")?),
        AdvancedMessage::new(to, MessageText::new("Scheduled message")?)
            .with_delivery_time(ScheduleTime::new("20270101090000")?),
    ];

    let result = client
        .advanced_batch_send(&batch, &BatchOptions::default())
        .await?;
    for (idx, response) in result.responses().iter().enumerate() {
        println!(
            "chunk {idx}: success: {}, msgid: {:?}",
            response.is_success(),
            response.message_id()
        );
    }

    Ok(())
}
