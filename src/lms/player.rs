use serde_json::Value;

use crate::{
    lms::{
        LmsClient, LmsError,
        rpc::SERVER_SCOPE,
    },
    types::{self, Player, PlayerStatus},
};

/// Status tags requested alongside the snapshot: artist, buttons, coverid,
/// current title, track info and playlist metadata.
const STATUS_TAGS: &str = "tags:abcltiqyKo";

/// Retrieves the full player roster from the server.
///
/// This is a server-level query (not scoped to a player) and the only call
/// player resolution depends on. A server without any attached players
/// yields an empty vector, not an error.
pub async fn players(client: &LmsClient) -> Result<Vec<Player>, LmsError> {
    let result = client
        .command(SERVER_SCOPE, &["players", "0", "100"])
        .await?;

    match result.get("players_loop") {
        Some(list) => serde_json::from_value(list.clone())
            .map_err(|e| LmsError::Parse(format!("failed to parse players: {}", e))),
        None => Ok(Vec::new()),
    }
}

/// Retrieves a player's status snapshot with current-track tags.
///
/// The typed fields cover what the handlers need; the rest of the payload
/// is kept verbatim in [`PlayerStatus::extra`].
pub async fn status(client: &LmsClient, mac: &str) -> Result<PlayerStatus, LmsError> {
    let result = client
        .command(mac, &["status", "0", "1", STATUS_TAGS])
        .await?;

    serde_json::from_value(result)
        .map_err(|e| LmsError::Parse(format!("failed to parse player status: {}", e)))
}

/// Current track title, `?` when nothing is loaded.
pub async fn title(client: &LmsClient, mac: &str) -> Result<String, LmsError> {
    scalar_string(client, mac, "title").await
}

/// Current track artist.
pub async fn artist(client: &LmsClient, mac: &str) -> Result<String, LmsError> {
    scalar_string(client, mac, "artist").await
}

/// Current track album.
pub async fn album(client: &LmsClient, mac: &str) -> Result<String, LmsError> {
    scalar_string(client, mac, "album").await
}

/// Current play mode (`play`, `pause` or `stop`).
pub async fn mode(client: &LmsClient, mac: &str) -> Result<String, LmsError> {
    scalar_string(client, mac, "mode").await
}

/// Seconds elapsed in the current track, if known.
pub async fn elapsed(client: &LmsClient, mac: &str) -> Result<Option<f64>, LmsError> {
    scalar_seconds(client, mac, "time").await
}

/// Duration of the current track in seconds, if known.
pub async fn duration(client: &LmsClient, mac: &str) -> Result<Option<f64>, LmsError> {
    scalar_seconds(client, mac, "duration").await
}

async fn scalar_string(client: &LmsClient, mac: &str, field: &str) -> Result<String, LmsError> {
    let value = client.scalar_query(mac, field).await?;
    Ok(types::json_string(&value).unwrap_or_else(|| "?".to_string()))
}

async fn scalar_seconds(
    client: &LmsClient,
    mac: &str,
    field: &str,
) -> Result<Option<f64>, LmsError> {
    let value: Value = client.scalar_query(mac, field).await?;
    Ok(types::json_f64(&value))
}
