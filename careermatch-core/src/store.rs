//! Single owner of all UI state. Views read from [`AppState`] and every change
//! goes through [`AppState::dispatch`], which returns the side effect the
//! shell has to carry out.

use crate::catalog;
use crate::error::CoreError;
use crate::profile::ProfileEditor;
use crate::types::{InternshipPosting, Page, ProfileField, Recommendation, ResumeFile};
use crate::upload::{AnalysisTicket, RecommendationFlow};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(Page),
    /// The recommendations page's own back button; clears the upload.
    BackFromRecommendations,
    ViewDetails(u32),
    SearchCatalog(String),
    SubmitResume(Option<ResumeFile>),
    AnalysisFinished {
        ticket: AnalysisTicket,
        recommendations: Vec<Recommendation>,
    },
    ResetUpload,
    /// Index into the current recommendation list.
    OpenApplication(usize),
    BeginEdit,
    EditField(ProfileField, String),
    EditSkills(String),
    SaveProfile,
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    StartAnalysis {
        ticket: AnalysisTicket,
        file: ResumeFile,
    },
    CancelAnalysis(AnalysisTicket),
    OpenUrl(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    page: Page,
    catalog_query: String,
    flow: RecommendationFlow,
    profile: ProfileEditor,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            catalog_query: String::new(),
            flow: RecommendationFlow::new(),
            profile: ProfileEditor::new(catalog::default_profile()),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn flow(&self) -> &RecommendationFlow {
        &self.flow
    }

    pub fn profile(&self) -> &ProfileEditor {
        &self.profile
    }

    pub fn catalog_query(&self) -> &str {
        &self.catalog_query
    }

    pub fn visible_postings(&self) -> Vec<&'static InternshipPosting> {
        catalog::search(&self.catalog_query)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Effect, CoreError> {
        match action {
            Action::Navigate(page) => Ok(self.navigate(page)),
            Action::BackFromRecommendations => {
                let cancelled = self.flow.reset();
                self.page = Page::Home;
                Ok(cancelled.map_or(Effect::None, Effect::CancelAnalysis))
            }
            Action::ViewDetails(id) => {
                if catalog::find(id).is_none() {
                    return Err(CoreError::NotFound {
                        resource: format!("internship posting {}", id),
                    });
                }
                Ok(self.navigate(Page::PostingDetail(id)))
            }
            Action::SearchCatalog(query) => {
                self.catalog_query = query;
                Ok(Effect::None)
            }
            Action::SubmitResume(file) => {
                let ticket = self.flow.submit(file)?;
                let file = self.flow.file().cloned().ok_or_else(|| CoreError::Internal {
                    message: "accepted resume missing from flow".to_string(),
                })?;
                info!("Analyzing resume {} ({})", file.name, ticket);
                Ok(Effect::StartAnalysis { ticket, file })
            }
            Action::AnalysisFinished {
                ticket,
                recommendations,
            } => {
                self.flow.complete(ticket, recommendations);
                Ok(Effect::None)
            }
            Action::ResetUpload => Ok(self
                .flow
                .reset()
                .map_or(Effect::None, Effect::CancelAnalysis)),
            Action::OpenApplication(index) => {
                let recommendation =
                    self.flow
                        .recommendations()
                        .get(index)
                        .ok_or_else(|| CoreError::NotFound {
                            resource: format!("recommendation #{}", index + 1),
                        })?;
                Ok(Effect::OpenUrl(recommendation.application_url.clone()))
            }
            Action::BeginEdit => {
                self.profile.begin_edit();
                Ok(Effect::None)
            }
            Action::EditField(field, value) => {
                self.profile.edit_field(field, value);
                Ok(Effect::None)
            }
            Action::EditSkills(text) => {
                self.profile.edit_skills(&text);
                Ok(Effect::None)
            }
            Action::SaveProfile => {
                self.profile.save();
                Ok(Effect::None)
            }
            Action::CancelEdit => {
                self.profile.cancel();
                Ok(Effect::None)
            }
        }
    }

    fn navigate(&mut self, page: Page) -> Effect {
        debug!("Navigating from {:?} to {:?}", self.page, page);
        let leaving_recommendations =
            self.page == Page::Recommendations && page != Page::Recommendations;
        self.page = page;

        if leaving_recommendations {
            if let Some(ticket) = self.flow.cancel_pending() {
                return Effect::CancelAnalysis(ticket);
            }
        }
        Effect::None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
