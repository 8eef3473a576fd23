pub mod details;
pub mod home;
pub mod profile;
pub mod recommendations;

use crate::Message;
use careermatch_core::MatchStrength;
use iced::widget::{row, text, Row};
use iced::{Color, Element};

pub(crate) const BRAND: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub(crate) const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.5);
pub(crate) const STIPEND: Color = Color::from_rgb(0.09, 0.64, 0.29);

pub(crate) fn strength_color(strength: MatchStrength) -> Color {
    match strength {
        MatchStrength::Strong => Color::from_rgb(0.09, 0.64, 0.29),
        MatchStrength::Moderate => BRAND,
        MatchStrength::Weak => Color::from_rgb(0.92, 0.35, 0.05),
    }
}

pub(crate) fn skill_tags<'a>(skills: impl IntoIterator<Item = &'a String>) -> Row<'a, Message> {
    skills
        .into_iter()
        .fold(row![].spacing(8), |tags, skill| {
            tags.push(text(format!("[{}]", skill)).size(12).style(MUTED))
        })
}

pub(crate) fn labelled<'a>(label: &str, value: &str) -> Element<'a, Message> {
    row![
        text(format!("{}:", label)).size(14).style(MUTED),
        text(value).size(14)
    ]
    .spacing(6)
    .into()
}
