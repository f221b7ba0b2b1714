//! # wbtags Architecture
//!
//! wbtags adds tag-based organization to a chat front-end's world books
//! (lore files). It is a **UI-agnostic library** with a small CLI client; the
//! same core can sit behind a browser extension, a desktop app, or a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and commands (commands/*.rs)                  │
//! │  - Resolve world-book ids, run operations                   │
//! │  - Return structured CmdResult values, never print          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: TagStore (store/) and TagFilter (filter.rs)          │
//! │  - Tag normalization, per-world tag sets, filter selection  │
//! │  - AND-semantics filtering, order preserving                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (store::Persister)                             │
//! │  - FilePersister, MemPersister, Debounced wrapper           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core Rules
//!
//! - A world book with no entry has no tags; setting an empty list removes
//!   the entry.
//! - Tags are trimmed, non-empty, and unique per world book (case-sensitive),
//!   in first-seen order.
//! - A filter matches world books carrying *every* selected tag and keeps the
//!   caller's order.
//! - Core operations never fail. Persistence is fire-and-forget: the store
//!   logs a failed write and carries on.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by front ends
//! - [`commands`]: business logic per operation
//! - [`store`]: [`store::TagStore`] and persisters
//! - [`filter`]: filter matching
//! - [`tags`]: tag text splitting and normalization
//! - [`model`]: persisted settings
//! - [`worlds`]: discovering world-book names on disk
//! - [`config`]: configuration loading
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
pub mod tags;
pub mod worlds;
