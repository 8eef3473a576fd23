//! Upload → processing → results state machine for the recommendation page.
//!
//! Each accepted submission is stamped with an [`AnalysisTicket`]. Completions
//! are only applied when they carry the ticket of the analysis currently in
//! flight, so a late completion from a cancelled run can never overwrite state.

use crate::error::UploadError;
use crate::types::{Recommendation, ResumeFile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisTicket(u64);

impl AnalysisTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AnalysisTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "analysis#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Processing {
        file: ResumeFile,
        ticket: AnalysisTicket,
    },
    Ready {
        file: ResumeFile,
        recommendations: Vec<Recommendation>,
    },
}

#[derive(Debug, Clone)]
pub struct RecommendationFlow {
    state: FlowState,
    next_ticket: u64,
}

impl RecommendationFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::Idle,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn file(&self) -> Option<&ResumeFile> {
        match &self.state {
            FlowState::Idle => None,
            FlowState::Processing { file, .. } | FlowState::Ready { file, .. } => Some(file),
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, FlowState::Processing { .. })
    }

    pub fn pending_ticket(&self) -> Option<AnalysisTicket> {
        match &self.state {
            FlowState::Processing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Empty unless an analysis has completed.
    pub fn recommendations(&self) -> &[Recommendation] {
        match &self.state {
            FlowState::Ready {
                recommendations, ..
            } => recommendations,
            _ => &[],
        }
    }

    pub fn submit(&mut self, file: Option<ResumeFile>) -> Result<AnalysisTicket, UploadError> {
        if !matches!(self.state, FlowState::Idle) {
            return Err(UploadError::AlreadySubmitted);
        }

        let file = file.ok_or(UploadError::NoFileSelected)?;
        if !file.is_pdf() {
            warn!(
                "Rejected resume {} with media type {}",
                file.name, file.media_type
            );
            return Err(UploadError::UnsupportedMediaType {
                file_name: file.name,
                media_type: file.media_type,
            });
        }

        let ticket = AnalysisTicket(self.next_ticket);
        self.next_ticket += 1;
        debug!("Resume {} accepted as {}", file.name, ticket);
        self.state = FlowState::Processing { file, ticket };
        Ok(ticket)
    }

    /// Applies the analysis result. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: AnalysisTicket, recommendations: Vec<Recommendation>) -> bool {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::Processing {
                file,
                ticket: current,
            } if current == ticket => {
                debug!(
                    "{} finished with {} recommendations",
                    ticket,
                    recommendations.len()
                );
                self.state = FlowState::Ready {
                    file,
                    recommendations,
                };
                true
            }
            previous => {
                debug!("Discarding stale completion for {}", ticket);
                self.state = previous;
                false
            }
        }
    }

    /// Drops an in-flight analysis, returning its ticket. Ready results are kept.
    pub fn cancel_pending(&mut self) -> Option<AnalysisTicket> {
        let ticket = self.pending_ticket()?;
        debug!("Cancelling {}", ticket);
        self.state = FlowState::Idle;
        Some(ticket)
    }

    /// Clears the file and any results. Returns the ticket of a cancelled run.
    pub fn reset(&mut self) -> Option<AnalysisTicket> {
        let cancelled = self.pending_ticket();
        self.state = FlowState::Idle;
        cancelled
    }
}

impl Default for RecommendationFlow {
    fn default() -> Self {
        Self::new()
    }
}
