use analysis_service::{AnalysisReport, AnalysisService};
use careermatch_core::{
    Action, AnalysisTicket, AppConfig, AppState, CoreError, Effect, ErrorExt, ErrorReporter, Page,
    ProfileField, ResumeFile,
};
use iced::widget::{button, column, container, text};
use iced::{event, window, Alignment, Command, Element, Event, Length, Subscription};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

mod browser;
mod pages;

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    BackFromRecommendations,
    ViewDetails(u32),
    SearchChanged(String),
    ResumePathChanged(String),
    SubmitResumePath,
    FileDropped(PathBuf),
    AnalysisFinished(Option<AnalysisReport>),
    ResetUpload,
    Apply(usize),
    BeginEdit,
    FieldChanged(ProfileField, String),
    SkillsChanged(String),
    SaveProfile,
    CancelEdit,
    DismissAlert,
}

pub struct App {
    state: AppState,
    analysis: AnalysisService,
    pending: Option<(AnalysisTicket, CancellationToken)>,
    resume_path: String,
    skills_input: String,
    alert: Option<String>,
    reporter: ErrorReporter,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(),
            analysis: AnalysisService::new(config.analysis_delay()),
            pending: None,
            resume_path: String::new(),
            skills_input: String::new(),
            alert: None,
            reporter: ErrorReporter::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Result<Command<Message>, CoreError> {
        // The alert is blocking: only dismissing it (and background completions) gets through.
        if self.alert.is_some()
            && !matches!(
                message,
                Message::DismissAlert | Message::AnalysisFinished(_)
            )
        {
            debug!("Ignoring {:?} while an alert is open", message);
            return Ok(Command::none());
        }

        let action = match message {
            Message::DismissAlert => {
                self.alert = None;
                return Ok(Command::none());
            }
            Message::ResumePathChanged(path) => {
                self.resume_path = path;
                return Ok(Command::none());
            }
            Message::SubmitResumePath => {
                let path = self.resume_path.trim();
                let file = (!path.is_empty()).then(|| ResumeFile::from_path(path));
                Action::SubmitResume(file)
            }
            Message::FileDropped(path) => {
                if self.state.page() != Page::Recommendations {
                    debug!("Ignoring dropped file {} outside the upload page", path.display());
                    return Ok(Command::none());
                }
                Action::SubmitResume(Some(ResumeFile::from_path(path)))
            }
            Message::AnalysisFinished(None) => return Ok(Command::none()),
            Message::AnalysisFinished(Some(report)) => {
                if matches!(&self.pending, Some((ticket, _)) if *ticket == report.ticket) {
                    self.pending = None;
                }
                Action::AnalysisFinished {
                    ticket: report.ticket,
                    recommendations: report.recommendations,
                }
            }
            Message::Navigate(page) => Action::Navigate(page),
            Message::BackFromRecommendations => Action::BackFromRecommendations,
            Message::ViewDetails(id) => Action::ViewDetails(id),
            Message::SearchChanged(query) => Action::SearchCatalog(query),
            Message::ResetUpload => Action::ResetUpload,
            Message::Apply(index) => Action::OpenApplication(index),
            Message::BeginEdit => {
                self.skills_input = self.state.profile().profile().skills.join(", ");
                Action::BeginEdit
            }
            Message::FieldChanged(field, value) => Action::EditField(field, value),
            Message::SkillsChanged(input) => {
                self.skills_input = input.clone();
                Action::EditSkills(input)
            }
            Message::SaveProfile => Action::SaveProfile,
            Message::CancelEdit => Action::CancelEdit,
        };

        match self.state.dispatch(action) {
            Ok(effect) => Ok(self.perform(effect)),
            Err(error @ CoreError::Upload(_)) => {
                self.reporter.report_warning(&error);
                self.alert = Some(error.user_friendly_message());
                Ok(Command::none())
            }
            Err(error) => Err(error),
        }
    }

    fn perform(&mut self, effect: Effect) -> Command<Message> {
        match effect {
            Effect::None => Command::none(),
            Effect::StartAnalysis { ticket, file } => {
                self.resume_path.clear();
                let token = CancellationToken::new();
                if let Some((_, previous)) = self.pending.replace((ticket, token.clone())) {
                    previous.cancel();
                }

                let service = self.analysis.clone();
                Command::perform(
                    async move { service.run(ticket, file, token).await },
                    Message::AnalysisFinished,
                )
            }
            Effect::CancelAnalysis(ticket) => {
                match self.pending.take() {
                    Some((pending, token)) if pending == ticket => token.cancel(),
                    other => self.pending = other,
                }
                Command::none()
            }
            Effect::OpenUrl(url) => {
                if let Err(e) = browser::open_application(&url) {
                    warn!("Could not open application link: {:#}", e);
                }
                Command::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status| match event {
            Event::Window(_, window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Some(alert) = &self.alert {
            return alert_view(alert);
        }

        let page = match self.state.page() {
            Page::Home => pages::home::view(&self.state),
            Page::Recommendations => pages::recommendations::view(&self.state, &self.resume_path),
            Page::Profile => pages::profile::view(self.state.profile(), &self.skills_input),
            Page::PostingDetail(id) => pages::details::view(id),
        };

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }
}

fn alert_view(message: &str) -> Element<'_, Message> {
    let dialog = container(
        column![
            text(message).size(18),
            button("OK").on_press(Message::DismissAlert).padding([8, 24])
        ]
        .spacing(20)
        .align_items(Alignment::Center),
    )
    .padding(30)
    .style(iced::theme::Container::Box);

    container(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
}
