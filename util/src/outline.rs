//! # Test Outline
//!
//! The structural tree of a test: sections own question groups, groups own
//! questions. Every level keeps the invariant that an item's `order` field
//! equals its index in the owning collection. Callers mutate the tree only
//! through the explicit insert/remove/reorder operations below, which renumber
//! after every change; there is no path that leaves stale order fields behind.
//!
//! Saving an edited test uses full-subtree replacement ([`Section::replace_groups`]):
//! the incoming tree simply becomes the stored tree, so removed groups and
//! questions cannot outlive a save.

use serde::{Deserialize, Serialize};

use crate::question::Question;

/// A block of questions sharing one set of instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGroup {
    pub id: i64,
    /// Position of this group within its section (0-based, matches index).
    pub order: i32,
    pub instructions: String,
    pub questions: Vec<Question>,
}

/// One timed section of a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    /// Position of this section within its test (0-based, matches index).
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<i64>,
    pub groups: Vec<QuestionGroup>,
}

impl QuestionGroup {
    /// Insert a question at `index`, shifting later questions down.
    pub fn insert_question(&mut self, index: usize, question: Question) -> Result<(), String> {
        if index > self.questions.len() {
            return Err(format!(
                "insert index {} out of range for {} questions",
                index,
                self.questions.len()
            ));
        }
        self.questions.insert(index, question);
        self.renumber();
        Ok(())
    }

    /// Append a question at the end of the group.
    pub fn push_question(&mut self, question: Question) {
        self.questions.push(question);
        self.renumber();
    }

    /// Remove and return the question at `index`.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, String> {
        if index >= self.questions.len() {
            return Err(format!(
                "remove index {} out of range for {} questions",
                index,
                self.questions.len()
            ));
        }
        let removed = self.questions.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move the question at `from` to position `to`.
    pub fn reorder_question(&mut self, from: usize, to: usize) -> Result<(), String> {
        if from >= self.questions.len() || to >= self.questions.len() {
            return Err(format!(
                "reorder {} -> {} out of range for {} questions",
                from,
                to,
                self.questions.len()
            ));
        }
        let moved = self.questions.remove(from);
        self.questions.insert(to, moved);
        self.renumber();
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, question) in self.questions.iter_mut().enumerate() {
            question.order = index as i32;
        }
    }
}

impl Section {
    /// Insert a group at `index`, shifting later groups down.
    pub fn insert_group(&mut self, index: usize, group: QuestionGroup) -> Result<(), String> {
        if index > self.groups.len() {
            return Err(format!(
                "insert index {} out of range for {} groups",
                index,
                self.groups.len()
            ));
        }
        self.groups.insert(index, group);
        self.renumber();
        Ok(())
    }

    /// Remove and return the group at `index`.
    pub fn remove_group(&mut self, index: usize) -> Result<QuestionGroup, String> {
        if index >= self.groups.len() {
            return Err(format!(
                "remove index {} out of range for {} groups",
                index,
                self.groups.len()
            ));
        }
        let removed = self.groups.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Move the group at `from` to position `to`.
    pub fn reorder_group(&mut self, from: usize, to: usize) -> Result<(), String> {
        if from >= self.groups.len() || to >= self.groups.len() {
            return Err(format!(
                "reorder {} -> {} out of range for {} groups",
                from,
                to,
                self.groups.len()
            ));
        }
        let moved = self.groups.remove(from);
        self.groups.insert(to, moved);
        self.renumber();
        Ok(())
    }

    /// Replace the whole subtree of this section with `groups`.
    ///
    /// Save semantics are full replacement, not incremental diffing: whatever
    /// the editor holds becomes the stored tree, and every order field in the
    /// subtree is renumbered from scratch.
    pub fn replace_groups(&mut self, groups: Vec<QuestionGroup>) {
        self.groups = groups;
        self.renumber();
    }

    fn renumber(&mut self) {
        for (index, group) in self.groups.iter_mut().enumerate() {
            group.order = index as i32;
            group.renumber();
        }
    }
}
