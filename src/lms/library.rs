use crate::{
    lms::{LmsClient, LmsError},
    types::{self, LoadAction, LoadKind, SearchHit, SearchKind, SearchResults},
};

/// How many hits a search requests and reports at most.
pub const SEARCH_PAGE_SIZE: u64 = 25;

/// Searches the music library for `query` within one category.
///
/// Asks the server for the first [`SEARCH_PAGE_SIZE`] hits; `count` in the
/// result still carries the full match count so callers can report how much
/// was truncated.
pub async fn search(
    client: &LmsClient,
    mac: &str,
    kind: SearchKind,
    query: &str,
) -> Result<SearchResults, LmsError> {
    let result = client
        .command(
            mac,
            &[
                kind.command(),
                "0",
                &SEARCH_PAGE_SIZE.to_string(),
                &format!("search:{}", query),
            ],
        )
        .await?;

    let hits = result
        .get(kind.loop_key())
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .map(|item| SearchHit {
                    id: item
                        .get("id")
                        .and_then(types::json_string)
                        .unwrap_or_else(|| "?".to_string()),
                    label: item
                        .get(kind.label_field())
                        .and_then(types::json_string)
                        .unwrap_or_else(|| "?".to_string()),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let count = result
        .get("count")
        .and_then(types::json_u64)
        .unwrap_or(hits.len() as u64);

    Ok(SearchResults { count, hits })
}

/// Loads, appends or inserts one library item into a player's playlist
/// via `playlistcontrol`.
pub async fn playlist_control(
    client: &LmsClient,
    mac: &str,
    kind: LoadKind,
    item_id: u64,
    action: LoadAction,
) -> Result<(), LmsError> {
    client
        .command(
            mac,
            &[
                "playlistcontrol",
                &format!("cmd:{}", action),
                &format!("{}:{}", kind.id_tag(), item_id),
            ],
        )
        .await
        .map(drop)
}
