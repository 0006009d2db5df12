//! Serde model of a game log as exported by the platform.
//!
//! The export is a JSON rendering of protobuf messages, so zero-valued fields
//! (seat 0, `zimo: false`, `ben: 0`, ...) are frequently omitted. Every numeric
//! field therefore falls back to its default.

pub mod action;
pub mod schema;

pub use action::{Action, DiscardTile, GameRecord, HuleEntry, NewRound, NoTile, NoTileScore, RecordHule, RecordKind};
pub use schema::{RawAccount, RawAction, RawHead, RawPaifu, RawPlayerResult, RawRecord};
