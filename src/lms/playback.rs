use crate::{
    lms::{LmsClient, LmsError},
    utils::VolumeSpec,
};

/// Starts playback.
pub async fn play(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["play"]).await.map(drop)
}

/// Stops playback.
pub async fn stop(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["stop"]).await.map(drop)
}

/// Toggles between play and pause.
pub async fn pause_toggle(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["pause"]).await.map(drop)
}

/// Skips to the next playlist entry.
pub async fn next(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["playlist", "index", "+1"]).await.map(drop)
}

/// Returns to the previous playlist entry.
pub async fn previous(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["playlist", "index", "-1"]).await.map(drop)
}

/// Jumps to an absolute playlist position (0-indexed).
pub async fn jump(client: &LmsClient, mac: &str, position: u64) -> Result<(), LmsError> {
    client
        .command(mac, &["playlist", "index", &position.to_string()])
        .await
        .map(drop)
}

/// Clears the playlist.
pub async fn clear(client: &LmsClient, mac: &str) -> Result<(), LmsError> {
    client.command(mac, &["playlist", "clear"]).await.map(drop)
}

/// Sets or adjusts the mixer volume.
///
/// The sign convention rides on the wire format: `mixer volume 40` sets an
/// absolute level while `mixer volume +5` / `mixer volume -5` nudge the
/// current one.
pub async fn set_volume(client: &LmsClient, mac: &str, spec: VolumeSpec) -> Result<(), LmsError> {
    let level = match spec {
        VolumeSpec::Absolute(v) => v.to_string(),
        VolumeSpec::Relative(d) => format!("{:+}", d),
    };
    client.command(mac, &["mixer", "volume", &level]).await.map(drop)
}
