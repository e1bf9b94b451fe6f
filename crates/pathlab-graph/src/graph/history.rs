//! Undo/redo log of creation actions.

use super::{Edge, Node};
use serde::{Deserialize, Serialize};

/// A recorded creation, holding its own copy of what was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Action {
    Node(Node),
    Edge(Edge),
}

/// Two-stack history: `done` and `undone`.
///
/// Recording a new action clears `undone`. Since nodes and edges are append-only, popping an
/// action always corresponds to popping the last element of the matching collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    done: Vec<Action>,
    undone: Vec<Action>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: Action) {
        self.done.push(action);
        self.undone.clear();
    }

    /// Moves the latest action to the redo stack and returns it.
    pub fn undo(&mut self) -> Option<Action> {
        let action = self.done.pop()?;
        self.undone.push(action.clone());
        Some(action)
    }

    /// Moves the latest undone action back to the done stack and returns it.
    pub fn redo(&mut self) -> Option<Action> {
        let action = self.undone.pop()?;
        self.done.push(action.clone());
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn done(&self) -> &[Action] {
        &self.done
    }

    pub fn undone(&self) -> &[Action] {
        &self.undone
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
