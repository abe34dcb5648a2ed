use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    lms::{self, LmsClient},
    types::SearchKind,
    utils,
};

/// Searches the music library and prints the first page of hits.
///
/// The query words are space-joined in the order given on the command
/// line. At most [`lms::library::SEARCH_PAGE_SIZE`] hits are printed, each
/// as `[<id>] <label>`; the count line carries the server's full match
/// count. A spinner runs on the error stream while the database query is
/// in flight, so stdout stays clean for scripts.
pub async fn search(client: &LmsClient, mac: &str, kind: SearchKind, query_parts: Vec<String>) {
    let query = utils::join_query(&query_parts);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching {} for \"{}\"...", kind, query));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let results = match lms::library::search(client, mac, kind, &query).await {
        Ok(results) => {
            pb.finish_and_clear();
            results
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };

    println!("Found {} {}:", results.count, kind);
    for hit in &results.hits {
        println!("  [{}] {}", hit.id, hit.label);
    }
}
