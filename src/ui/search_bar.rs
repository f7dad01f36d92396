//! Input for the field bound to the active search mode

use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use super::theme::DarkTheme;
use crate::backend::SearchMode;

/// Longest value the form accepts for `mode`
pub fn max_len(mode: SearchMode) -> usize {
    match mode {
        SearchMode::ByKey => 11,
        _ => 50,
    }
}

/// Cut `value` to the field's max length, counting characters
pub fn clamp(mode: SearchMode, value: String) -> String {
    let max = max_len(mode);
    if value.chars().count() <= max {
        value
    } else {
        value.chars().take(max).collect()
    }
}

/// Text shown in the input; the form sends the same value uppercased
pub fn display_value(value: &str) -> String {
    value.to_uppercase()
}

fn label(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::ByFirstName => "Nombre del vendedor",
        SearchMode::BySurname => "Apellido paterno o materno",
        SearchMode::ByCommissionType => "Tipo de comisión (código exacto)",
        SearchMode::ByKey => "Clave del vendedor",
    }
}

fn placeholder(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::ByFirstName => "Ingrese el nombre",
        SearchMode::BySurname => "Ingrese el apellido",
        SearchMode::ByCommissionType => "Ej: CA, CB",
        SearchMode::ByKey => "Ingrese la clave",
    }
}

/// Labelled text input for the active field
pub fn view<'a, Message: Clone + 'a>(
    mode: SearchMode,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    column![
        text(label(mode)).size(14).color(DarkTheme::TEXT_MUTED),
        text_input(placeholder(mode), &display_value(value))
            .on_input(on_input)
            .on_submit(on_submit)
            .padding(12)
            .size(18)
            .width(Length::Fill),
    ]
    .spacing(6)
    .into()
}
