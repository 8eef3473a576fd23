use super::{labelled, skill_tags, strength_color, BRAND, MUTED};
use crate::Message;
use careermatch_core::{AppState, FlowState, Page, Recommendation};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{theme, Alignment, Element, Length};

pub fn view<'a>(state: &'a AppState, resume_path: &str) -> Element<'a, Message> {
    let nav = row![
        button("← Back to Home")
            .on_press(Message::BackFromRecommendations)
            .style(theme::Button::Text),
        Space::with_width(Length::Fill),
        text("CareerMatch").size(28).style(BRAND),
        Space::with_width(Length::Fill),
        button("Profile")
            .on_press(Message::Navigate(Page::Profile))
            .style(theme::Button::Text),
    ]
    .align_items(Alignment::Center);

    let body = match state.flow().state() {
        FlowState::Idle => upload_panel(resume_path),
        FlowState::Processing { file, .. } => processing_panel(&file.name),
        FlowState::Ready {
            recommendations, ..
        } => results(recommendations),
    };

    column![nav, body].spacing(24).into()
}

fn upload_panel<'a>(resume_path: &str) -> Element<'a, Message> {
    container(
        column![
            text("Get Personalized Recommendations").size(30),
            text("Upload your resume to receive AI-powered internship matches")
                .size(16)
                .style(MUTED),
            text_input("Path to your resume (PDF)", resume_path)
                .on_input(Message::ResumePathChanged)
                .on_submit(Message::SubmitResumePath)
                .padding(10),
            button("Upload Resume (PDF)")
                .on_press(Message::SubmitResumePath)
                .padding([12, 28]),
            text("…or drop a PDF onto this window").size(13).style(MUTED),
            text("We analyze your skills, experience, and preferences")
                .size(13)
                .style(MUTED),
        ]
        .spacing(16)
        .align_items(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}

fn processing_panel<'a>(file_name: &str) -> Element<'a, Message> {
    container(
        column![
            text("Analyzing Your Resume").size(26),
            text(format!(
                "Parsing skills, experience, and matching {} with opportunities...",
                file_name
            ))
            .style(MUTED),
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}

fn results(recommendations: &[Recommendation]) -> Element<'_, Message> {
    let cards = recommendations
        .iter()
        .enumerate()
        .fold(Column::new().spacing(20), |list, (rank, rec)| {
            list.push(recommendation_card(rank, rec))
        });

    column![
        column![
            text("Your Top Matches").size(30),
            text("Based on your resume analysis").style(MUTED),
        ]
        .spacing(6)
        .align_items(Alignment::Center)
        .width(Length::Fill),
        scrollable(
            column![
                cards,
                container(
                    button("Upload a different resume")
                        .on_press(Message::ResetUpload)
                        .style(theme::Button::Text)
                )
                .width(Length::Fill)
                .center_x(),
            ]
            .spacing(20)
        )
        .height(Length::Fill),
    ]
    .spacing(20)
    .into()
}

fn recommendation_card(rank: usize, rec: &Recommendation) -> Element<'_, Message> {
    let strength = rec.strength();
    let posting = &rec.posting;

    container(
        column![
            row![
                text(format!("#{}", rank + 1)).size(22).style(BRAND),
                column![
                    text(&posting.title).size(22),
                    text(&posting.company).style(MUTED)
                ]
                .spacing(2),
                Space::with_width(Length::Fill),
                text(format!("★ {}% Match ({})", rec.match_score, strength))
                    .size(18)
                    .style(strength_color(strength)),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            row![
                labelled("Location", &posting.location),
                labelled("Duration", &posting.duration),
                labelled("Stipend", &posting.stipend),
            ]
            .spacing(24),
            text(&posting.description),
            column![
                text("Why This Match?").size(14).style(BRAND),
                text(&rec.reason).size(14),
            ]
            .spacing(4),
            skill_tags(&posting.skills),
            button("Apply Now ↗")
                .on_press(Message::Apply(rank))
                .width(Length::Fill)
                .padding(10),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}
