use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the server's player roster.
///
/// LMS reports boolean-ish attributes (`connected`, `isplaying`, `power`)
/// as `0`/`1`, occasionally as strings; they are kept optional because
/// older server versions omit some of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub playerid: String,
    pub name: String,
    #[serde(default, deserialize_with = "opt_u64_or_string")]
    pub connected: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_or_string")]
    pub isplaying: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_or_string")]
    pub power: Option<u64>,
}

impl Player {
    /// Renders a boolean-ish roster attribute, `?` when the server
    /// omitted it.
    pub fn flag(value: Option<u64>) -> String {
        value.map_or_else(|| "?".to_string(), |v| v.to_string())
    }
}

/// A player's full status snapshot as returned by the `status` query.
///
/// The fields the handlers rely on are typed; everything else the server
/// sends is preserved in `extra` so the `status` command can dump the
/// complete snapshot without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(
        rename = "mixer volume",
        default,
        deserialize_with = "opt_i64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mixer_volume: Option<i64>,
    #[serde(
        default,
        deserialize_with = "opt_f64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<f64>,
    #[serde(
        default,
        deserialize_with = "opt_f64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    #[serde(
        default,
        deserialize_with = "opt_u64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub playlist_cur_index: Option<u64>,
    #[serde(
        default,
        deserialize_with = "opt_u64_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub playlist_tracks: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Result of a library search: the total match count reported by the
/// server plus the first page of hits.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub count: u64,
    pub hits: Vec<SearchHit>,
}

/// One search hit, reduced to its database id and display label
/// (album title, artist name, or track title depending on the kind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub label: String,
}

/// Library categories the `search` command can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Albums,
    Artists,
    Songs,
}

impl SearchKind {
    /// The LMS database verb for this category.
    pub fn command(&self) -> &'static str {
        match self {
            SearchKind::Albums => "albums",
            SearchKind::Artists => "artists",
            SearchKind::Songs => "songs",
        }
    }

    /// The `*_loop` key the server uses in its response. LMS answers the
    /// `songs` verb with `titles_loop`.
    pub fn loop_key(&self) -> &'static str {
        match self {
            SearchKind::Albums => "albums_loop",
            SearchKind::Artists => "artists_loop",
            SearchKind::Songs => "titles_loop",
        }
    }

    /// The per-item field carrying the display label.
    pub fn label_field(&self) -> &'static str {
        match self {
            SearchKind::Albums => "album",
            SearchKind::Artists => "artist",
            SearchKind::Songs => "title",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Item categories the `load` command can push onto a playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoadKind {
    Album,
    Artist,
    Track,
}

impl LoadKind {
    /// The tagged-parameter name `playlistcontrol` expects for this kind.
    pub fn id_tag(&self) -> &'static str {
        match self {
            LoadKind::Album => "album_id",
            LoadKind::Artist => "artist_id",
            LoadKind::Track => "track_id",
        }
    }
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadKind::Album => f.write_str("album"),
            LoadKind::Artist => f.write_str("artist"),
            LoadKind::Track => f.write_str("track"),
        }
    }
}

/// How `playlistcontrol` merges the selected item into the playlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LoadAction {
    /// Replace the playlist and start playing.
    #[default]
    Load,
    /// Append to the end of the playlist.
    Add,
    /// Insert after the current track.
    Insert,
}

impl fmt::Display for LoadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadAction::Load => f.write_str("load"),
            LoadAction::Add => f.write_str("add"),
            LoadAction::Insert => f.write_str("insert"),
        }
    }
}

// LMS is inconsistent about numeric fields: depending on version and query
// they arrive as JSON numbers or as decimal strings. The deserializers
// below accept both.

fn opt_u64_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_u64))
}

fn opt_i64_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_i64))
}

fn opt_f64_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_f64))
}

/// Extracts a `u64` from a JSON number or decimal string.
pub fn json_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts an `i64` from a JSON number or decimal string.
pub fn json_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts an `f64` from a JSON number or decimal string.
pub fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts a display string from a JSON string or number.
pub fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
