//! Shared application state.
//!
//! One `CoreState` instance is created at startup, wrapped in `Arc`,
//! and shared by every request handler. It owns a single slot holding
//! the current report phase and the chat session grounded in the
//! current result. A new upload replaces both wholesale; the stored
//! result itself is an immutable `Arc` snapshot.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::analysis::chat::ChatSession;
use crate::models::AnalysisResult;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("state lock poisoned")]
    LockPoisoned,
}

/// Lifecycle of the single report slot.
#[derive(Debug, Clone, Default)]
pub enum ReportPhase {
    /// No report uploaded yet.
    #[default]
    Idle,
    /// An analysis call is in flight.
    Analyzing,
    /// A result is displayed; immutable until the next upload.
    Ready(Arc<AnalysisResult>),
    /// The last analysis failed; the message is user-facing.
    Failed(String),
}

pub struct CoreState {
    /// Current report phase. `RwLock` for concurrent reads from
    /// handlers; writes happen only on upload transitions.
    report: RwLock<ReportPhase>,
    /// Chat session for the current result. tokio `Mutex` because the
    /// lock is held across the remote call — this also serializes chat
    /// turns, matching the one-outstanding-request UI model.
    chat: tokio::sync::Mutex<Option<ChatSession>>,
}

impl CoreState {
    pub fn new() -> Self {
        Self {
            report: RwLock::new(ReportPhase::Idle),
            chat: tokio::sync::Mutex::new(None),
        }
    }

    /// Snapshot of the current phase.
    pub fn report_phase(&self) -> Result<ReportPhase, CoreError> {
        Ok(self.report.read().map_err(|_| CoreError::LockPoisoned)?.clone())
    }

    /// The current result, if one is displayed.
    pub fn current_result(&self) -> Result<Option<Arc<AnalysisResult>>, CoreError> {
        match self.report_phase()? {
            ReportPhase::Ready(result) => Ok(Some(result)),
            _ => Ok(None),
        }
    }

    /// Mark an analysis as in flight. The previous result stays visible
    /// to concurrent readers until the outcome replaces it.
    pub fn begin_analysis(&self) -> Result<(), CoreError> {
        self.set_phase(ReportPhase::Analyzing)
    }

    /// Install a fresh result and its grounded chat session.
    pub async fn install_report(
        &self,
        result: Arc<AnalysisResult>,
        session: ChatSession,
    ) -> Result<(), CoreError> {
        *self.chat.lock().await = Some(session);
        self.set_phase(ReportPhase::Ready(result))
    }

    /// Record a failed analysis and drop any stale chat session.
    pub async fn fail_analysis(&self, message: &str) -> Result<(), CoreError> {
        *self.chat.lock().await = None;
        self.set_phase(ReportPhase::Failed(message.to_string()))
    }

    /// Chat session slot; `None` until a report is installed.
    pub fn chat(&self) -> &tokio::sync::Mutex<Option<ChatSession>> {
        &self.chat
    }

    fn set_phase(&self, phase: ReportPhase) -> Result<(), CoreError> {
        *self.report.write().map_err(|_| CoreError::LockPoisoned)? = phase;
        Ok(())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
