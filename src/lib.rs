//! # flames-rs
//!
//! The FLAMES name-compatibility game.
//!
//! FLAMES is a playground game: write down two names, cross out the letters
//! they share, count what is left, and use that count to knock letters out
//! of the word FLAMES until one remains. The survivor names the
//! relationship: Friends, Lovers, Affectionate, Marriage, Enemies or
//! Siblings.
//!
//! ## Overview
//!
//! - **Engine** ([`flames`]): a pure, total function from two names to a
//!   [`Relationship`]
//! - **Trace** ([`trace`]): the same computation with every intermediate step
//!   recorded
//! - **History** ([`history`]): the last ten readings, newest first, kept in
//!   any [`KeyValueStore`]
//! - **Session** ([`session`]): input validation plus history recording, as
//!   the CLI and web UI use it
//!
//! ## Example
//!
//! ```
//! use flames_rs::{History, MemoryStore, Relationship, Session, compute_relationship};
//!
//! assert_eq!(compute_relationship("Harry", "Sally"), Relationship::Marriage);
//!
//! let mut session = Session::new(History::new(MemoryStore::new()));
//! let reading = session.calculate("Harry", "Sally", "1/1/2026, 9:00:00 AM").unwrap();
//! assert_eq!(
//!     reading.message(),
//!     "The relationship between Harry and Sally is: Marriage 💍"
//! );
//! assert_eq!(session.history().entries().unwrap().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod flames;
pub mod history;
pub mod session;
pub mod trace;

pub use config::Config;
pub use error::{FlamesError, Result};
pub use flames::{
    Outcome, RING, Relationship, Symbol, UnknownRelationship, cancel_common, compute_outcome,
    compute_relationship, eliminate, flames_count, normalize,
};
pub use history::{
    FileStore, HISTORY_KEY, HISTORY_LIMIT, History, HistoryEntry, KeyValueStore, MemoryStore,
};
pub use session::{Reading, Session, validate_names};
pub use trace::{EliminationStep, FlamesTrace, trace};
