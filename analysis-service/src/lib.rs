//! Deferred resume analysis.
//!
//! Nothing here reads the resume. After a fixed delay the configured
//! [`Recommender`] produces its recommendations, unless the run's
//! [`CancellationToken`] fires first.

use careermatch_core::{catalog, AnalysisTicket, Recommendation, ResumeFile};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

pub trait Recommender: Send + Sync {
    fn recommend(&self, resume: &ResumeFile) -> Vec<Recommendation>;
}

/// Returns the hardcoded recommendation table for every resume.
pub struct MockRecommender;

impl Recommender for MockRecommender {
    fn recommend(&self, _resume: &ResumeFile) -> Vec<Recommendation> {
        catalog::mock_recommendations()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub ticket: AnalysisTicket,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Clone)]
pub struct AnalysisService {
    delay: Duration,
    recommender: Arc<dyn Recommender>,
}

impl AnalysisService {
    pub fn new(delay: Duration) -> Self {
        Self::with_recommender(delay, Arc::new(MockRecommender))
    }

    pub fn with_recommender(delay: Duration, recommender: Arc<dyn Recommender>) -> Self {
        Self { delay, recommender }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolves to `None` if `token` is cancelled before the delay elapses.
    pub async fn run(
        &self,
        ticket: AnalysisTicket,
        resume: ResumeFile,
        token: CancellationToken,
    ) -> Option<AnalysisReport> {
        debug!("{} scheduled in {:?}", ticket, self.delay);

        tokio::select! {
            _ = token.cancelled() => {
                info!("{} cancelled before completion", ticket);
                None
            }
            _ = tokio::time::sleep(self.delay) => {
                let recommendations = self.recommender.recommend(&resume);
                info!(
                    "{} produced {} recommendations for {}",
                    ticket,
                    recommendations.len(),
                    resume.name
                );
                Some(AnalysisReport {
                    ticket,
                    recommendations,
                })
            }
        }
    }
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisService")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careermatch_core::{Action, AppState, Effect};

    fn pending_analysis(state: &mut AppState) -> (AnalysisTicket, ResumeFile) {
        match state
            .dispatch(Action::SubmitResume(Some(ResumeFile::from_path("cv.pdf"))))
            .unwrap()
        {
            Effect::StartAnalysis { ticket, file } => (ticket, file),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let mut state = AppState::new();
        let (ticket, file) = pending_analysis(&mut state);
        let service = AnalysisService::new(Duration::from_millis(2500));

        let started = tokio::time::Instant::now();
        let report = service
            .run(ticket, file, CancellationToken::new())
            .await
            .expect("analysis should complete");

        assert!(started.elapsed() >= Duration::from_millis(2500));
        assert_eq!(report.ticket, ticket);
        assert_eq!(report.recommendations.len(), 5);

        state
            .dispatch(Action::AnalysisFinished {
                ticket: report.ticket,
                recommendations: report.recommendations,
            })
            .unwrap();
        assert_eq!(state.flow().recommendations().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_wins_over_timer() {
        let mut state = AppState::new();
        let (ticket, file) = pending_analysis(&mut state);
        let service = AnalysisService::new(Duration::from_millis(2500));
        let token = CancellationToken::new();

        let run = tokio::spawn({
            let service = service.clone();
            let token = token.clone();
            async move { service.run(ticket, file, token).await }
        });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        token.cancel();

        assert_eq!(run.await.unwrap(), None);
    }

    struct EmptyRecommender;

    impl Recommender for EmptyRecommender {
        fn recommend(&self, _resume: &ResumeFile) -> Vec<Recommendation> {
            Vec::new()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn uses_configured_recommender() {
        let mut state = AppState::new();
        let (ticket, file) = pending_analysis(&mut state);
        let service =
            AnalysisService::with_recommender(Duration::from_millis(10), Arc::new(EmptyRecommender));

        let report = service
            .run(ticket, file, CancellationToken::new())
            .await
            .unwrap();
        assert!(report.recommendations.is_empty());
    }
}
