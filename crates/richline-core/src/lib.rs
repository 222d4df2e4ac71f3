#![warn(missing_docs)]
//! Richline Core - Line-Indexed Search & Structural Synchronization Engine
//!
//! # Overview
//!
//! `richline-core` bridges two incompatible addressing schemes over the same
//! document: a rich-text store addressable only through opaque, forward-
//! navigable positions, and a plain-text projection of that store split into
//! lines. Everything line-shaped a host editor wants (jump-to-header,
//! find/replace, selective header restyling) is reconstructed on top of the
//! position contract, correctly even when the document contains duplicate
//! lines.
//!
//! # Core Features
//!
//! - **Line projection**: one fixed split policy shared by every line-based
//!   feature, so indices never disagree
//! - **Occurrence disambiguation**: exact text plus occurrence rank re-finds
//!   "the 3rd line that says X" without positional identity
//! - **Stateful search**: case-folded find-next with single wraparound, and
//!   exact-count replace-all
//! - **Header outline**: ATX header detection with a navigable, never-empty
//!   outline
//! - **Guarded restyling**: header formatting that is invisible to dirty
//!   tracking and restores the caret
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Engine Boundary (host-facing operations)   │  ← Public API
//! ├──────────────────────┬──────────────────────┤
//! │  Search  │  Outline  │  Header Formatting   │  ← Features
//! ├──────────────────────┴──────────────────────┤
//! │  Occurrence Locator (rank-disambiguated)    │  ← Line ↔ position bridge
//! ├─────────────────────────────────────────────┤
//! │  Line Projection (fixed split policy)       │  ← Plain-text view
//! ├─────────────────────────────────────────────┤
//! │  PositionedDocument contract                │  ← Host document
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use richline_core::engine;
//! use richline_core::{DocumentSession, PositionedDocument, RichTextBuffer};
//!
//! let mut doc = RichTextBuffer::new("# Title\n\nbody text\n## Sub");
//! let mut session = DocumentSession::new();
//!
//! // Outline of detected headers.
//! let outline = engine::build_outline(&doc);
//! assert_eq!(outline.headers().count(), 2);
//!
//! // Jump to the "## Sub" line.
//! engine::navigate_to(&mut doc, 3);
//! assert_eq!(doc.offset_of(&doc.caret()), 19);
//!
//! // Case-insensitive find, exact-count replace.
//! assert!(engine::find(&mut doc, &mut session, "BODY", false));
//! assert_eq!(engine::replace_all(&mut doc, &mut session, "body", "main", false), 1);
//! assert!(session.has_unsaved_changes());
//!
//! // Header restyling is never observable as a user edit.
//! session.mark_saved();
//! engine::reformat_headers(&mut doc, &session);
//! assert!(!session.has_unsaved_changes());
//! ```
//!
//! # Module Description
//!
//! - [`position`] - the opaque-position document contract
//! - [`buffer`] - rope-backed reference document implementation
//! - [`projection`] - plain-text line projection and occurrence ranks
//! - [`locate`] - rank-disambiguated line-to-range resolution
//! - [`search`] - stateful find-next, replace, replace-all
//! - [`outline`] - ATX header detection and outline construction
//! - [`format`] - level-keyed header restyling under the formatting guard
//! - [`session`] - per-document state: dirty flag, guard, deferred queue
//! - [`engine`] - the host-facing boundary
//!
//! # Concurrency Model
//!
//! Single-threaded and cooperative: every operation runs synchronously on
//! the UI-owning thread, queries re-derive from the live document, and the
//! only deferred execution is the session's zero-delay continuation queue.
//! An in-flight scan always runs to completion; hosts bound the cost by
//! keeping documents at interactive sizes.

pub mod buffer;
pub mod engine;
pub mod format;
pub mod locate;
pub mod outline;
pub mod position;
pub mod projection;
pub mod search;
pub mod session;

pub use buffer::{BufferPosition, RichTextBuffer, StyledSpan};
pub use locate::LineMatch;
pub use outline::{HeaderEntry, Outline, OutlineItem};
pub use position::{Color, DEFAULT_TEXT_STYLE, PositionedDocument, TextStyle};
pub use projection::ProjectedLine;
pub use search::{SearchCursor, SearchOptions};
pub use session::{DeferredOp, DocumentSession, FormattingGuard};
