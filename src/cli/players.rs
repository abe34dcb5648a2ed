use crate::{
    error,
    lms::{self, LmsClient},
    types::Player,
    warning,
};

/// Lists the server's player roster.
///
/// The only command that runs without player resolution. One line per
/// player: display name, MAC address, and the connected/playing/power
/// flags (`?` where the server omitted one).
pub async fn players(client: &LmsClient) {
    let players = match lms::player::players(client).await {
        Ok(players) => players,
        Err(e) => error!("Failed to list players: {}", e),
    };

    if players.is_empty() {
        warning!("No players attached to this server.");
        return;
    }

    for p in &players {
        println!(
            "{:<12} {:<20} connected={} playing={} power={}",
            p.name,
            p.playerid,
            Player::flag(p.connected),
            Player::flag(p.isplaying),
            Player::flag(p.power)
        );
    }
}
