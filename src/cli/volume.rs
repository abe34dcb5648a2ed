use crate::{
    error, info,
    lms::{self, LmsClient},
    utils::VolumeSpec,
};

/// Sets or adjusts the mixer volume, then reports the resulting level.
///
/// Without an argument no mixer command is issued and only the current
/// volume is reported.
pub async fn volume(client: &LmsClient, mac: &str, spec: Option<VolumeSpec>) {
    if let Some(spec) = spec {
        if let Err(e) = lms::playback::set_volume(client, mac, spec).await {
            error!("Failed to set volume to {}: {}", spec, e);
        }
    }

    let status = match lms::player::status(client, mac).await {
        Ok(status) => status,
        Err(e) => error!("Failed to query player status: {}", e),
    };

    match status.mixer_volume {
        Some(level) => info!("Volume: {}", level),
        None => info!("Volume: ?"),
    }
}
