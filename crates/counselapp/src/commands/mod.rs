//! # Command Layer
//!
//! This module contains the **core business logic** of the console. Each operation lives in
//! its own submodule as a plain function over a [`RecordStore`](crate::store::RecordStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate their input at the boundary (via [`crate::forms`])
//! - Read and mutate the store
//! - Return a structured [`CmdResult`] with the affected or listed records and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr or terminal concerns
//! - **Mode tracking**: which screen is active is the controller's job ([`crate::view`])
//! - **Rendering**: the UI decides how a `CmdResult` looks
//!
//! ## Testing Strategy
//!
//! Most tests live here. They run against
//! [`MemoryStore`](crate::store::memory::MemoryStore) fixtures and check both the returned
//! `CmdResult` and the resulting store contents.
//!
//! ## Command Modules
//!
//! - [`create`]: add a counselor
//! - [`update`]: merge changes into a counselor
//! - [`delete`]: remove a counselor
//! - [`list`]: filtered listing of any collection
//! - [`dashboard`]: chart datasets and status summaries

use serde::Serialize;

pub mod create;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdResult<R> {
    pub affected: Vec<R>,
    pub listed: Vec<R>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            affected: Vec::new(),
            listed: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<R>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<R>) -> Self {
        self.listed = records;
        self
    }
}
