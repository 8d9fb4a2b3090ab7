//! Typed-text role rotation.
//!
//! Types a role one character at a time, holds it, deletes it, pauses, then
//! moves on to the next role, forever. The caller drives it from a timer:
//! every `step()` yields the text to show and how long to wait before the next
//! call.

use crate::constants::*;
use crate::error::FxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypePhase {
    Typing,
    PausingAtFull,
    Deleting,
    PausingAtEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
    pub phase: TypePhase,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<S: Into<String>>(roles: impl IntoIterator<Item = S>) -> Result<Self, FxError> {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(FxError::EmptyRoles);
        }
        if let Some(i) = roles.iter().position(|r| r.is_empty()) {
            return Err(FxError::EmptyRole(i));
        }
        Ok(Self {
            roles,
            role_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    /// Advance by one character and report what to display next.
    pub fn step(&mut self) -> TypeStep {
        let role_len = self.roles[self.role_index].chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(role_len);
        }
        let text: String = self.roles[self.role_index]
            .chars()
            .take(self.char_index)
            .collect();

        let (delay_ms, phase) = if !self.deleting && self.char_index == role_len {
            self.deleting = true;
            (PAUSE_FULL_MS, TypePhase::PausingAtFull)
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            (PAUSE_EMPTY_MS, TypePhase::PausingAtEmpty)
        } else if self.deleting {
            (DELETE_CHAR_MS, TypePhase::Deleting)
        } else {
            (TYPE_CHAR_MS, TypePhase::Typing)
        };

        TypeStep {
            text,
            delay_ms,
            phase,
        }
    }
}
