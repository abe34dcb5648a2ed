use crate::{
    error,
    lms::{self, LmsClient},
};

/// Dumps the player's full status snapshot as pretty-printed JSON
/// (2-space indent), typed fields and server extras alike.
pub async fn status(client: &LmsClient, mac: &str) {
    let status = match lms::player::status(client, mac).await {
        Ok(status) => status,
        Err(e) => error!("Failed to query player status: {}", e),
    };

    match serde_json::to_string_pretty(&status) {
        Ok(dump) => println!("{}", dump),
        Err(e) => error!("Failed to render status: {}", e),
    }
}
