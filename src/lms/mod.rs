//! # LMS Integration Module
//!
//! This module implements the JSON-RPC client for a Lyrion Music Server
//! (formerly Logitech Media Server). It is the only layer that talks to the
//! network; everything above it works with the typed records from
//! [`crate::types`].
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! covers one domain of the server API:
//!
//! ```text
//! Application Layer (CLI handlers)
//!          ↓
//! LMS Integration Layer
//!     ├── rpc      (slim.request plumbing, error type)
//!     ├── player   (roster, status snapshot, current-track queries)
//!     ├── playback (transport and mixer commands)
//!     └── library  (database search, playlistcontrol)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! LMS /jsonrpc.js endpoint
//! ```
//!
//! ## Wire format
//!
//! Every call is a POST of
//! `{"id": 1, "method": "slim.request", "params": [<player id>, [<terms>]]}`
//! to `/jsonrpc.js`; the payload comes back in the `result` member. Player
//! scoped commands carry the player's MAC address as the first param,
//! server-level commands (the roster query) use `"0"`.
//!
//! ## Error handling
//!
//! All functions return [`LmsError`]. The CLI layer deliberately performs no
//! retries: a transport or server failure is reported to the user and the
//! process exits non-zero. Timeout policy lives in the HTTP client
//! configuration here, not in the handlers.

pub mod library;
pub mod playback;
pub mod player;
pub mod rpc;

pub use rpc::{LmsClient, LmsError};
