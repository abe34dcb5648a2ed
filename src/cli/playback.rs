use crate::{
    error,
    lms::{self, LmsClient},
    success,
};

/// Starts playback and reports the current track title.
pub async fn play(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::play(client, mac).await {
        error!("Failed to start playback: {}", e);
    }
    match lms::player::title(client, mac).await {
        Ok(title) => success!("Playing: {}", title),
        Err(e) => error!("Failed to query current title: {}", e),
    }
}

/// Stops playback.
pub async fn stop(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::stop(client, mac).await {
        error!("Failed to stop playback: {}", e);
    }
    success!("Stopped");
}

/// Toggles pause and reports the resulting play mode.
pub async fn pause(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::pause_toggle(client, mac).await {
        error!("Failed to toggle pause: {}", e);
    }
    match lms::player::mode(client, mac).await {
        Ok(mode) => success!("Mode: {}", mode),
        Err(e) => error!("Failed to query play mode: {}", e),
    }
}

/// Skips to the next track and reports the new title.
pub async fn next(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::next(client, mac).await {
        error!("Failed to skip track: {}", e);
    }
    report_now_playing(client, mac).await;
}

/// Returns to the previous track and reports the new title.
pub async fn prev(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::previous(client, mac).await {
        error!("Failed to skip back: {}", e);
    }
    report_now_playing(client, mac).await;
}

/// Jumps to an absolute playlist position and reports the new title.
pub async fn jump(client: &LmsClient, mac: &str, position: u64) {
    if let Err(e) = lms::playback::jump(client, mac, position).await {
        error!("Failed to jump to position {}: {}", position, e);
    }
    match lms::player::title(client, mac).await {
        Ok(title) => success!("Jumped to {}: {}", position, title),
        Err(e) => error!("Failed to query current title: {}", e),
    }
}

/// Clears the playlist.
pub async fn clear(client: &LmsClient, mac: &str) {
    if let Err(e) = lms::playback::clear(client, mac).await {
        error!("Failed to clear playlist: {}", e);
    }
    success!("Playlist cleared");
}

async fn report_now_playing(client: &LmsClient, mac: &str) {
    match lms::player::title(client, mac).await {
        Ok(title) => success!("Now playing: {}", title),
        Err(e) => error!("Failed to query current title: {}", e),
    }
}
