use super::{skill_tags, BRAND, MUTED, STIPEND};
use crate::Message;
use careermatch_core::{AppState, InternshipPosting, Page};
use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{theme, Alignment, Element, Length};

pub fn view(state: &AppState) -> Element<'_, Message> {
    let nav = row![
        text("CareerMatch").size(28).style(BRAND),
        Space::with_width(Length::Fill),
        button("Profile")
            .on_press(Message::Navigate(Page::Profile))
            .style(theme::Button::Text),
        button("Get Recommendations →").on_press(Message::Navigate(Page::Recommendations)),
    ]
    .spacing(16)
    .align_items(Alignment::Center);

    let header = column![
        text("Available Internships").size(32),
        text("Explore exciting opportunities to kickstart your career")
            .size(16)
            .style(MUTED),
    ]
    .spacing(8);

    let search = text_input("Search by title, company or skill", state.catalog_query())
        .on_input(Message::SearchChanged)
        .padding(10);

    let postings = state.visible_postings();
    let listing: Element<'_, Message> = if postings.is_empty() {
        text(format!(
            "No internships match \"{}\"",
            state.catalog_query().trim()
        ))
        .style(MUTED)
        .into()
    } else {
        postings
            .into_iter()
            .fold(Column::new().spacing(16), |list, posting| {
                list.push(posting_card(posting))
            })
            .into()
    };

    column![nav, header, search, scrollable(listing).height(Length::Fill)]
        .spacing(24)
        .into()
}

fn posting_card(posting: &'static InternshipPosting) -> Element<'static, Message> {
    container(
        column![
            row![
                text(&posting.title).size(20),
                Space::with_width(Length::Fill),
                text(&posting.stipend).size(14).style(STIPEND),
            ]
            .align_items(Alignment::Center),
            text(&posting.company).size(16),
            text(format!("{} • {}", posting.location, posting.duration))
                .size(13)
                .style(MUTED),
            text(&posting.description).size(14),
            skill_tags(posting.skills.iter().take(3)),
            button("View Details")
                .on_press(Message::ViewDetails(posting.id))
                .style(theme::Button::Secondary),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}
