use crate::{
    error,
    lms::{self, LmsClient},
    success,
    types::{LoadAction, LoadKind},
};

/// Loads a library item into the player's playlist via `playlistcontrol`.
///
/// `action` decides whether the item replaces the playlist (`load`,
/// the default), is appended (`add`), or plays next (`insert`).
pub async fn load(client: &LmsClient, mac: &str, kind: LoadKind, id: u64, action: LoadAction) {
    if let Err(e) = lms::library::playlist_control(client, mac, kind, id, action).await {
        error!("Failed to load {} {}: {}", kind, id, e);
    }
    success!("Loaded {} {} (action={})", kind, id, action);
}
