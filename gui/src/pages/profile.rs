use super::{skill_tags, BRAND, MUTED};
use crate::Message;
use careermatch_core::{Page, ProfileEditor, ProfileField, UserProfile};
use iced::widget::{button, column, row, scrollable, text, text_input, Column, Space};
use iced::{theme, Alignment, Element, Length};

pub fn view<'a>(editor: &'a ProfileEditor, skills_input: &str) -> Element<'a, Message> {
    let nav = row![
        button("← Back to Home")
            .on_press(Message::Navigate(Page::Home))
            .style(theme::Button::Text),
        Space::with_width(Length::Fill),
        text("My Profile").size(28).style(BRAND),
        Space::with_width(Length::Fill),
    ]
    .align_items(Alignment::Center);

    let body = if editor.is_editing() {
        edit_form(editor.draft(), skills_input)
    } else {
        summary(editor.profile())
    };

    column![nav, scrollable(body).height(Length::Fill)]
        .spacing(24)
        .into()
}

fn summary(profile: &UserProfile) -> Element<'_, Message> {
    column![
        row![
            column![
                text(&profile.name).size(36),
                text(&profile.location).size(16).style(MUTED),
            ]
            .spacing(6),
            Space::with_width(Length::Fill),
            button("Edit Profile")
                .on_press(Message::BeginEdit)
                .style(theme::Button::Secondary),
        ]
        .align_items(Alignment::Center),
        row![
            contact("Email", &profile.email),
            contact("Phone", &profile.phone)
        ]
        .spacing(48),
        column![
            text("Education").size(20).style(BRAND),
            text(&profile.education).size(18),
            text(&profile.university).style(MUTED),
            text(format!("Graduated: {}", profile.graduation_year))
                .size(13)
                .style(MUTED),
        ]
        .spacing(6),
        column![
            text("Skills").size(20).style(BRAND),
            skill_tags(&profile.skills)
        ]
        .spacing(8),
    ]
    .spacing(28)
    .into()
}

fn contact<'a>(label: &str, value: &str) -> Element<'a, Message> {
    column![text(label).size(13).style(MUTED), text(value).size(16)]
        .spacing(2)
        .into()
}

fn edit_form<'a>(draft: &UserProfile, skills_input: &str) -> Element<'a, Message> {
    let fields = ProfileField::ALL
        .into_iter()
        .fold(Column::new().spacing(12), |form, field| {
            form.push(
                column![
                    text(field.label()).size(13).style(MUTED),
                    text_input(field.label(), draft.field(field))
                        .on_input(move |value| Message::FieldChanged(field, value))
                        .padding(8),
                ]
                .spacing(4),
            )
        });

    column![
        row![
            text("Editing profile").size(24),
            Space::with_width(Length::Fill),
            button("✓ Save")
                .on_press(Message::SaveProfile)
                .style(theme::Button::Positive),
            button("✕ Cancel")
                .on_press(Message::CancelEdit)
                .style(theme::Button::Secondary),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
        fields,
        column![
            text("Skills").size(13).style(MUTED),
            text_input("React, Python, ...", skills_input)
                .on_input(Message::SkillsChanged)
                .padding(8),
            text("Enter skills separated by commas.")
                .size(12)
                .style(MUTED),
        ]
        .spacing(4),
    ]
    .spacing(20)
    .into()
}
