// history.rs - Append-only, position-indexed cache of generations

use log::{trace, warn};

use crate::automaton::{Automaton, Evolve};
use crate::{Error, Result};

/// Every generation computed so far, plus a cursor into them.
///
/// Generations are computed lazily, only when the cursor steps past the last
/// one, and are never dropped, so scrubbing backwards (or forwards again)
/// never recomputes anything. The cursor is always a valid index.
#[derive(Debug, Clone)]
pub struct StateHistory<G = Automaton> {
    generations: Vec<G>,
    position: usize,
}

impl<G: Evolve> StateHistory<G> {
    /// Starts a history with `seed` as generation 0.
    pub fn new(seed: G) -> Self {
        Self {
            generations: vec![seed],
            position: 0,
        }
    }

    pub fn current(&self) -> &G {
        &self.generations[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of generations computed so far (never zero).
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the cursor is on the newest computed generation.
    pub fn is_at_frontier(&self) -> bool {
        self.position + 1 == self.generations.len()
    }

    /// All computed generations, oldest first.
    pub fn generations(&self) -> impl Iterator<Item = &G> + '_ {
        self.generations.iter()
    }

    /// Steps forward one generation, computing it if it is new.
    pub fn advance(&mut self) -> &G {
        if self.is_at_frontier() {
            let next = self.current().next_generation();
            self.generations.push(next);
            trace!("extended history to {} generations", self.generations.len());
        } else {
            trace!("advancing into cached generation {}", self.position + 1);
        }
        self.position += 1;
        self.current()
    }

    /// Steps back one generation. Does nothing at generation 0.
    pub fn retreat(&mut self) -> &G {
        if self.position > 0 {
            self.position -= 1;
        }
        self.current()
    }

    /// Jumps to generation `index`.
    ///
    /// Any already-computed index is a pure lookup. `index == len()` computes
    /// exactly one new generation, like [`advance`](Self::advance) from the
    /// frontier. Anything further out is rejected and the cursor stays put.
    pub fn go_to(&mut self, index: usize) -> Result<&G> {
        let len = self.generations.len();
        if index == len {
            self.position = len - 1;
            return Ok(self.advance());
        }
        if index > len {
            warn!("rejected history jump to {} (len {})", index, len);
            return Err(Error::InvalidIndex { index, len });
        }
        self.position = index;
        Ok(self.current())
    }

    /// Returns to generation 0, keeping every computed generation.
    pub fn reset(&mut self) -> &G {
        self.position = 0;
        self.current()
    }
}
