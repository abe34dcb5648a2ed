//! Player resolution.
//!
//! Every player-scoped LMS command needs the player's MAC address. Users
//! may instead give a display name (or set `LMSCLI_PLAYER`), which is
//! matched against the live roster here. The roster is fetched fresh on
//! every invocation that needs it; nothing is cached.

use crate::{config, error, lms, types::Player};

/// Finds a roster entry by display name, case-insensitively.
///
/// Display names are not guaranteed unique on an LMS server; when several
/// players share a name the first entry in roster order wins. That
/// tie-break is a deliberate contract, covered by tests.
pub fn find_player<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Joins all roster display names, comma-separated, in roster order.
/// Used to make "player not found" errors actionable.
pub fn roster_names(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the command-line player selection to a MAC address.
///
/// Resolution order:
/// 1. An explicit `--mac` wins unconditionally and is returned without
///    querying the server.
/// 2. Otherwise the name from `--player`, falling back to `LMSCLI_PLAYER`,
///    is matched against the live roster (case-insensitive exact match).
/// 3. With neither, or with a name no roster entry matches, the process
///    exits 1 with guidance on the error stream.
pub async fn resolve(
    client: &lms::LmsClient,
    mac: Option<String>,
    player_name: Option<String>,
) -> String {
    if let Some(mac) = mac {
        return mac;
    }

    let Some(name) = player_name.or_else(config::default_player) else {
        error!("No player specified. Use --player NAME, --mac MAC, or set LMSCLI_PLAYER.");
    };

    let players = match lms::player::players(client).await {
        Ok(players) => players,
        Err(e) => error!("Failed to list players: {}", e),
    };

    match find_player(&players, &name) {
        Some(player) => player.playerid.clone(),
        None => {
            error!(
                "Player \"{}\" not found. Available: {}",
                name,
                roster_names(&players)
            );
        }
    }
}
