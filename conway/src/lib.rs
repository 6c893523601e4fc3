//! Life-like cellular automaton engine.
//!
//! A seed [`CellGrid`] becomes an [`Automaton`], which is wrapped as
//! generation 0 of a [`StateHistory`]. The history computes successors lazily
//! and keeps every one it has computed, so playback can scrub backwards and
//! forwards without recomputation.
//!
//! ```
//! use conway::{Automaton, RuleConfig, StateHistory};
//!
//! let blinker = Automaton::from_rows(
//!     vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]],
//!     RuleConfig::CLASSIC,
//! )
//! .unwrap();
//! let mut history = StateHistory::new(blinker.clone());
//! history.advance();
//! history.advance();
//! assert_eq!(history.current(), &blinker);
//! assert_eq!(history.reset(), &blinker);
//! ```

pub mod automaton;
pub mod editor;
mod error;
pub mod grid;
pub mod history;
pub mod patterns;

pub use automaton::{Automaton, Evolve, RuleConfig, Truthy};
pub use editor::{Editor, PaintSession};
pub use error::{Error, Result};
pub use grid::{Cell, CellGrid};
pub use history::StateHistory;
pub use patterns::{Pattern, PATTERNS};

/// A generation is an automaton snapshot: cells plus the rule that evolves them.
pub type Generation = Automaton;
