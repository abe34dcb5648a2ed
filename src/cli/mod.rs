//! # CLI Module
//!
//! This module provides the command-line interface layer for lmscli, a
//! remote control for players attached to a Lyrion Music Server. It
//! implements all user-facing CLI commands and coordinates between the LMS
//! client, player resolution, and output formatting.
//!
//! ## Command Categories
//!
//! ### Transport
//!
//! - [`play`] / [`stop`] / [`pause`] - Basic playback control
//! - [`next`] / [`prev`] - Playlist navigation
//! - [`jump`] - Jump to an absolute playlist position
//! - [`clear`] - Empty the playlist
//!
//! ### Mixer
//!
//! - [`volume`] - Set, adjust, or report the mixer volume
//!
//! ### Library
//!
//! - [`search`] - Query the music database for albums, artists, or songs
//! - [`load`] - Load/append/insert a library item into the playlist
//!
//! ### Reporting
//!
//! - [`info`] - Formatted current-track block
//! - [`players`] - List the server's player roster
//! - [`status`] - Dump the full status snapshot as pretty-printed JSON
//!
//! ## Error Handling Philosophy
//!
//! Handlers either complete their full report or exit before printing a
//! misleading partial one: every remote failure goes through the `error!`
//! macro, which writes to the error stream and terminates with exit code 1.
//! No retries, no fallbacks — this layer's job is dispatch and formatting,
//! not resiliency.
//!
//! ## Output Conventions
//!
//! Action confirmations use the colored status macros; data blocks (the
//! info block, roster lines, search hits, the JSON status dump) are plain
//! `println!` output so they stay easy to consume from scripts.

mod info;
mod load;
mod playback;
mod players;
mod search;
mod status;
mod volume;

pub use info::info;
pub use load::load;
pub use playback::{clear, jump, next, pause, play, prev, stop};
pub use players::players;
pub use search::search;
pub use status::status;
pub use volume::volume;
