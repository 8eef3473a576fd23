use super::{labelled, skill_tags, BRAND, MUTED, STIPEND};
use crate::Message;
use careermatch_core::{catalog, Page};
use iced::widget::{button, column, container, row, text, Space};
use iced::{theme, Alignment, Element, Length};

pub fn view(id: u32) -> Element<'static, Message> {
    let nav = row![
        button("← Back to Home")
            .on_press(Message::Navigate(Page::Home))
            .style(theme::Button::Text),
        Space::with_width(Length::Fill),
        button("Get Recommendations →").on_press(Message::Navigate(Page::Recommendations)),
    ]
    .align_items(Alignment::Center);

    let Some(posting) = catalog::find(id) else {
        return column![nav, text("This internship is no longer listed.").style(MUTED)]
            .spacing(24)
            .into();
    };

    let card = container(
        column![
            text(&posting.title).size(32),
            text(&posting.company).size(20).style(BRAND),
            row![
                labelled("Location", &posting.location),
                labelled("Duration", &posting.duration),
                text(&posting.stipend).size(14).style(STIPEND),
            ]
            .spacing(24),
            text(&posting.description).size(16),
            text("Required skills").size(16).style(MUTED),
            skill_tags(&posting.skills),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Length::Fill)
    .style(theme::Container::Box);

    column![nav, card].spacing(24).into()
}
