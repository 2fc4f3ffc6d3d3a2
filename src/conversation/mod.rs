use serde::Serialize;
use thiserror::Error;

use crate::models::chat::TurnBody;

/// Message attribution recognized by the provider API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One message in the sequence sent upstream. Immutable once assembled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Inbound request fields that fail validation. Any malformed history entry
/// rejects the whole request; nothing is dropped silently.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("history entry {index} has unknown role '{role}'")]
    UnknownRole { index: usize, role: String },

    #[error("history entry {index} has empty content")]
    EmptyContent { index: usize },

    #[error("{0}")]
    Body(String),
}

/// Build the exact message sequence sent to the provider:
/// `[system prompt] + history (original order) + [new user message]`.
///
/// Only the configured `history_limit` trims anything, keeping the most
/// recent entries; validation always covers the full submitted history.
pub fn assemble(
    system_prompt: &str,
    history: &[TurnBody],
    new_message: &str,
    history_limit: usize,
) -> Result<Vec<Turn>, ValidationError> {
    let message = new_message.trim();
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }

    for (index, entry) in history.iter().enumerate() {
        if entry.content.trim().is_empty() {
            return Err(ValidationError::EmptyContent { index });
        }
        if Role::from_name(&entry.role).is_none() {
            return Err(ValidationError::UnknownRole {
                index,
                role: entry.role.clone(),
            });
        }
    }

    let skip = history.len().saturating_sub(history_limit);
    let mut turns = Vec::with_capacity(history.len().min(history_limit) + 2);
    turns.push(Turn::new(Role::System, system_prompt));
    for entry in &history[skip..] {
        // from_name cannot fail here, the loop above checked every entry
        let role = Role::from_name(&entry.role).unwrap_or(Role::User);
        turns.push(Turn::new(role, entry.content.clone()));
    }
    turns.push(Turn::new(Role::User, message));
    Ok(turns)
}
