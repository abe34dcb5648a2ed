use crate::{
    error,
    lms::{self, LmsClient},
    utils,
};

/// Displays a formatted block describing the current track and player state.
///
/// Combines the scalar current-track queries (title, artist, album, mode,
/// elapsed, duration) with the status snapshot (volume, playlist position).
/// Times render as `M:SS` with `?:??` for unknowns; the track position is
/// 1-indexed `current/total`.
///
/// # Output Example
///
/// ```text
/// Title:    Harvest Moon
/// Artist:   Neil Young
/// Album:    Harvest Moon
/// Mode:     play
/// Time:     1:05/5:03
/// Volume:   40
/// Track:    3/12
/// ```
pub async fn info(client: &LmsClient, mac: &str) {
    let title = query(lms::player::title(client, mac).await);
    let artist = query(lms::player::artist(client, mac).await);
    let album = query(lms::player::album(client, mac).await);
    let mode = query(lms::player::mode(client, mac).await);
    let elapsed = query(lms::player::elapsed(client, mac).await);
    let duration = query(lms::player::duration(client, mac).await);

    let status = match lms::player::status(client, mac).await {
        Ok(status) => status,
        Err(e) => error!("Failed to query player status: {}", e),
    };
    let volume = status
        .mixer_volume
        .map_or_else(|| "?".to_string(), |v| v.to_string());

    println!("Title:    {}", title);
    println!("Artist:   {}", artist);
    println!("Album:    {}", album);
    println!("Mode:     {}", mode);
    println!(
        "Time:     {}/{}",
        utils::fmt_time(elapsed),
        utils::fmt_time(duration)
    );
    println!("Volume:   {}", volume);
    println!(
        "Track:    {}",
        utils::fmt_track_position(status.playlist_cur_index, status.playlist_tracks)
    );
}

/// Unwraps one track query, exiting before any of the block is printed if
/// the server call failed. Keeps the report all-or-nothing.
fn query<T>(result: Result<T, lms::LmsError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => error!("Failed to query track info: {}", e),
    }
}
