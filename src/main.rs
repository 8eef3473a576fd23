use careermatch_core::{AppConfig, CoreError, ErrorReporter};
use gui::App;
use iced::{Application, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CoreError> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting CareerMatch");

    let mut settings = Settings::with_flags(config.clone());
    settings.window = iced::window::Settings {
        size: iced::Size::new(config.window.width, config.window.height),
        min_size: Some(iced::Size::new(
            config.window.min_width,
            config.window.min_height,
        )),
        ..Default::default()
    };

    CareerMatchApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Internal {
            message: format!("GUI error: {e}"),
        }
    })
}

struct CareerMatchApp {
    app: App,
    reporter: ErrorReporter,
}

impl Application for CareerMatchApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = AppConfig;

    fn new(flags: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!(
            "Initializing application (analysis delay {:?})",
            flags.analysis_delay()
        );
        let app = Self {
            app: App::new(&flags),
            reporter: ErrorReporter::new(),
        };
        (app, iced::Command::none())
    }

    fn title(&self) -> String {
        "CareerMatch - Internship Recommendations".to_string()
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        match self.app.update(message) {
            Ok(command) => command,
            Err(e) => {
                self.reporter.report_error(&e);
                iced::Command::none()
            }
        }
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }

    fn subscription(&self) -> iced::Subscription<Self::Message> {
        self.app.subscription()
    }

    fn theme(&self) -> Self::Theme {
        iced::Theme::Light
    }
}
