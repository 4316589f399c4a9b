use std::fmt;

use simplicia_core::Set;
use thiserror::Error;

use crate::edge::DirectedLabelledEdge;
use crate::labelled::DirectedLabelledGraph;

/// A transition was requested for which the current state has no
/// matching out-edge.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("no transition labelled {label:?} leaves state {state:?}")]
pub struct InvalidTransition<S: fmt::Debug, L: fmt::Debug> {
    pub state: S,
    pub label: L,
}

/// A deterministic finite-state automaton over a labelled graph.
///
/// States are graph vertices and transitions are labelled edges. There is
/// no nondeterminism and no epsilon-moves: each accepted label moves the
/// machine along the unique matching out-edge and is appended to the
/// history.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FiniteStateAutomaton<S, L> {
    graph: DirectedLabelledGraph<S, L>,
    start: S,
    accept: Set<S>,
    state: S,
    history: Vec<L>,
}

impl<S, L> FiniteStateAutomaton<S, L>
where
    S: PartialEq + Clone + fmt::Debug,
    L: PartialEq + Clone + fmt::Debug,
{
    pub fn new(
        states: Set<S>,
        accept: Set<S>,
        transitions: Set<DirectedLabelledEdge<S, L>>,
        start: S,
    ) -> Self {
        Self {
            graph: DirectedLabelledGraph::from_parts(states, transitions),
            state: start.clone(),
            start,
            accept,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn start_state(&self) -> &S {
        &self.start
    }

    #[inline]
    pub fn accept_states(&self) -> &Set<S> {
        &self.accept
    }

    #[inline]
    pub fn history(&self) -> &[L] {
        &self.history
    }

    #[inline]
    pub fn graph(&self) -> &DirectedLabelledGraph<S, L> {
        &self.graph
    }

    /// The current state has an out-edge carrying `label` whose target is
    /// a known state.
    pub fn valid_transition(&self, label: &L) -> bool {
        match self.graph.terminal_vertex(&self.state, label) {
            Some(target) => self.graph.vertices().contains(target),
            None => false,
        }
    }

    /// Follows the out-edge labelled `label`, recording it in the
    /// history; fails without moving when no such edge exists.
    pub fn transition(&mut self, label: L) -> Result<(), InvalidTransition<S, L>> {
        let next = match self.graph.terminal_vertex(&self.state, &label) {
            Some(target) if self.graph.vertices().contains(target) => target.clone(),
            _ => {
                return Err(InvalidTransition {
                    state: self.state.clone(),
                    label,
                })
            }
        };
        self.state = next;
        self.history.push(label);
        Ok(())
    }

    pub fn is_in_accept_state(&self) -> bool {
        self.accept.contains(&self.state)
    }

    /// Returns to the start state and clears the history.
    pub fn reset(&mut self) {
        self.state = self.start.clone();
        self.history.clear();
    }
}
