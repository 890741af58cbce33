// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turn-order rotation.
//!
//! The rotation is a cyclic pointer into the roster with no terminal state.
//! It moves forward after each accepted pick while turn order is enforced,
//! and an administrator may move it either way. Removing a pick never moves
//! it back.
//!
//! With an empty roster there is no current agent and both transitions are
//! no-ops.

use vacation_pick_domain::{Agent, Roster};

/// The roster position whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotation {
    index: usize,
}

impl Rotation {
    /// Creates a rotation at a raw index.
    ///
    /// The index is interpreted modulo the roster length.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the roster position for a roster of `roster_len` agents.
    #[must_use]
    pub const fn position(&self, roster_len: usize) -> Option<usize> {
        if roster_len == 0 {
            None
        } else {
            Some(self.index % roster_len)
        }
    }

    /// Returns the agent whose turn it is.
    #[must_use]
    pub fn current<'a>(&self, roster: &'a Roster) -> Option<&'a Agent> {
        self.position(roster.len()).and_then(|i| roster.get(i))
    }

    /// Moves to the next roster position, wrapping after the last.
    pub const fn advance(&mut self, roster_len: usize) {
        if let Some(position) = self.position(roster_len) {
            self.index = (position + 1) % roster_len;
        }
    }

    /// Moves to the previous roster position, wrapping before the first.
    pub const fn retreat(&mut self, roster_len: usize) {
        if let Some(position) = self.position(roster_len) {
            self.index = (position + roster_len - 1) % roster_len;
        }
    }
}
