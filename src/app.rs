//! Search form application state and Iced wiring
//!
//! The form logic lives in [`SearchFormState`]; this module maps UI events
//! onto it and runs the backend call as a background task.

use iced::widget::{button, column, container, row, text, toggler, Space};
use iced::{Background, Border, Element, Length, Padding, Task, Theme};

use crate::backend::{SearchClient, SearchMode, SearchResponse};
use crate::form::{FieldUpdate, SearchFormState};
use crate::ui::theme::DarkTheme;
use crate::ui::{results_table, search_bar};

pub const TITLE: &str = "Búsqueda de Vendedores";

pub struct Vendedores {
    state: SearchFormState,
    client: SearchClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    ModeSelected(SearchMode),
    FieldChanged(String),
    ActiveOnlyToggled(bool),
    /// Enter pressed in the input
    Submit,
    Search,
    SearchFinished(Result<SearchResponse, String>),
    Clear,
}

impl Vendedores {
    pub fn new(client: SearchClient) -> Self {
        Self {
            state: SearchFormState::new(),
            client,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SearchFormState {
        &self.state
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => {
                self.state.set_mode(mode);
                Task::none()
            }

            Message::FieldChanged(value) => {
                let mode = self.state.form().mode;
                let value = search_bar::clamp(mode, value);
                self.state.set_field(FieldUpdate::for_mode(mode, value));
                Task::none()
            }

            Message::ActiveOnlyToggled(active_only) => {
                self.state.set_field(FieldUpdate::ActiveOnly(active_only));
                Task::none()
            }

            Message::Submit => {
                if self.state.is_valid() {
                    return self.update(Message::Search);
                }
                Task::none()
            }

            Message::Search => {
                let Some(request) = self.state.begin_search() else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move { client.search(&request).await.map_err(|e| e.to_string()) },
                    Message::SearchFinished,
                )
            }

            Message::SearchFinished(outcome) => {
                self.state.finish_search(outcome);
                Task::none()
            }

            Message::Clear => {
                self.state.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = self.state.form();
        let loading = self.state.is_loading();

        let header = column![
            text(TITLE).size(28).color(DarkTheme::TEXT),
            text("Localice vendedores por nombre, apellidos, tipo de comisión o clave")
                .size(14)
                .color(DarkTheme::TEXT_MUTED),
            toggler(form.active_only)
                .label("Solo vendedores activos")
                .on_toggle(Message::ActiveOnlyToggled),
        ]
        .spacing(8);

        let tabs: Vec<Element<'_, Message>> = SearchMode::ALL
            .into_iter()
            .map(|mode| {
                let style = if mode == form.mode {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(mode.label()))
                    .on_press(Message::ModeSelected(mode))
                    .style(style)
                    .width(Length::Fill)
                    .into()
            })
            .collect();
        let tabs = row(tabs).spacing(8);

        let input = search_bar::view(
            form.mode,
            form.field(form.mode),
            Message::FieldChanged,
            Message::Submit,
        );

        let search_label = if loading { "Buscando..." } else { "Buscar" };
        let actions = row![
            button(search_label)
                .on_press_maybe((self.state.is_valid() && !loading).then_some(Message::Search)),
            button("Limpiar")
                .on_press(Message::Clear)
                .style(button::secondary),
        ]
        .spacing(8);

        let mut criteria = column![
            text("Criterios de Búsqueda").size(18).color(DarkTheme::TEXT),
            tabs,
            input,
            actions,
        ]
        .spacing(12);

        if !self.state.message().is_empty() {
            criteria = criteria.push(
                container(text(self.state.message()).size(14).color(DarkTheme::TEXT))
                    .padding(Padding::from([10.0, 12.0]))
                    .width(Length::Fill)
                    .style(|_theme| container::Style {
                        background: Some(Background::Color(DarkTheme::BACKGROUND)),
                        border: Border {
                            color: DarkTheme::PRIMARY,
                            width: 1.0,
                            radius: 8.0.into(),
                        },
                        ..Default::default()
                    }),
            );
        }

        let criteria = container(criteria)
            .padding(16)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::SURFACE)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            });

        let results: Element<'_, Message> = if self.state.results().is_empty() {
            Space::with_height(0).into()
        } else {
            results_table::view(self.state.results(), self.state.total_count())
        };

        container(column![header, criteria, results].spacing(16))
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
