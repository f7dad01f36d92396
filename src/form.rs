//! Seller lookup form state
//!
//! Owns the field values bound to the UI, the active search mode and the
//! last search outcome. The presentation layer (GUI or CLI) only mutates
//! fields and triggers searches; every message shown to the user is decided
//! here.

use std::fmt::Display;

use crate::backend::{
    SearchMode, SearchRequest, SearchResponse, SellerResult, SellerSearch, DEFAULT_LIMIT,
};

pub const MSG_EMPTY_VALUE: &str = "Debe ingresar un valor para buscar";
pub const MSG_NO_RESULTS: &str = "No se encontraron vendedores con los criterios especificados";
pub const MSG_SEARCH_ERROR: &str = "Error al realizar la búsqueda";
pub const MSG_SERVER_UNREACHABLE: &str = "Error al comunicarse con el servidor";

pub fn limit_reached_message() -> String {
    format!(
        "Se alcanzó el límite de {} resultados. Considere refinar su búsqueda.",
        DEFAULT_LIMIT
    )
}

/// Raw field values as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub mode: SearchMode,
    pub first_name: String,
    pub surname: String,
    pub commission_type: String,
    pub key: String,
    pub active_only: bool,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            mode: SearchMode::ByKey,
            first_name: String::new(),
            surname: String::new(),
            commission_type: String::new(),
            key: String::new(),
            active_only: true,
        }
    }
}

impl FormData {
    /// Field bound to `mode`, as typed
    pub fn field(&self, mode: SearchMode) -> &str {
        match mode {
            SearchMode::ByFirstName => &self.first_name,
            SearchMode::BySurname => &self.surname,
            SearchMode::ByCommissionType => &self.commission_type,
            SearchMode::ByKey => &self.key,
        }
    }
}

/// A single field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    Surname(String),
    CommissionType(String),
    Key(String),
    ActiveOnly(bool),
}

impl FieldUpdate {
    /// Edit of the text field bound to `mode`
    pub fn for_mode(mode: SearchMode, value: impl Into<String>) -> Self {
        let value = value.into();
        match mode {
            SearchMode::ByFirstName => FieldUpdate::FirstName(value),
            SearchMode::BySurname => FieldUpdate::Surname(value),
            SearchMode::ByCommissionType => FieldUpdate::CommissionType(value),
            SearchMode::ByKey => FieldUpdate::Key(value),
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchFormState {
    form: FormData,
    results: Vec<SellerResult>,
    total_count: u32,
    loading: bool,
    failed: bool,
    message: String,
}

impl SearchFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn results(&self) -> &[SellerResult] {
        &self.results
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the last trigger ended without usable results because of a
    /// validation or backend error
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Switch the active mode. Other fields keep their values.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.form.mode = mode;
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(value) => self.form.first_name = value,
            FieldUpdate::Surname(value) => self.form.surname = value,
            FieldUpdate::CommissionType(value) => self.form.commission_type = value,
            FieldUpdate::Key(value) => self.form.key = value,
            FieldUpdate::ActiveOnly(value) => self.form.active_only = value,
        }
    }

    /// Uppercased value of the field bound to the active mode
    pub fn current_value(&self) -> String {
        self.form.field(self.form.mode).to_uppercase()
    }

    pub fn is_valid(&self) -> bool {
        !self.current_value().trim().is_empty()
    }

    /// Validate and build the request for one attempt.
    ///
    /// Returns `None` without touching the network when the active field is
    /// blank (the validation message is set) or when an attempt is already
    /// in flight. On `Some`, the state is loading until [`finish_search`]
    /// is called.
    ///
    /// [`finish_search`]: SearchFormState::finish_search
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if self.loading {
            tracing::debug!("Search already in flight, ignoring trigger");
            return None;
        }

        if !self.is_valid() {
            self.message = MSG_EMPTY_VALUE.to_string();
            self.failed = true;
            return None;
        }

        self.loading = true;
        self.failed = false;
        self.message.clear();

        Some(SearchRequest {
            mode: self.form.mode,
            value: self.current_value(),
            active_only: self.form.active_only,
            limit: Some(DEFAULT_LIMIT),
        })
    }

    /// Apply the outcome of the attempt started by [`begin_search`].
    ///
    /// An `Err` is an unexpected failure and is shown as a generic
    /// connectivity error.
    ///
    /// [`begin_search`]: SearchFormState::begin_search
    pub fn finish_search<E: Display>(&mut self, outcome: Result<SearchResponse, E>) {
        match outcome {
            Ok(response) if response.success => {
                self.results = response.sellers;
                self.total_count = response.total_count;

                if self.results.is_empty() {
                    self.message = MSG_NO_RESULTS.to_string();
                } else if self.total_count >= DEFAULT_LIMIT {
                    self.message = limit_reached_message();
                }
                tracing::debug!(
                    "Search returned {} rows ({} total)",
                    self.results.len(),
                    self.total_count
                );
            }
            Ok(response) => {
                self.message = if response.message.is_empty() {
                    MSG_SEARCH_ERROR.to_string()
                } else {
                    response.message
                };
                self.results.clear();
                self.total_count = 0;
                self.failed = true;
            }
            Err(e) => {
                tracing::error!("Search failed: {}", e);
                self.message = MSG_SERVER_UNREACHABLE.to_string();
                self.results.clear();
                self.total_count = 0;
                self.failed = true;
            }
        }

        self.loading = false;
    }

    /// Run one complete search attempt against `client`
    pub async fn search<C: SellerSearch>(&mut self, client: &C) {
        let Some(request) = self.begin_search() else {
            return;
        };
        let outcome = client.search_sellers(request).await;
        self.finish_search(outcome);
    }

    /// Reset text fields and results. Mode and the active-only flag stay.
    pub fn clear(&mut self) {
        self.form = FormData {
            mode: self.form.mode,
            active_only: self.form.active_only,
            ..FormData::default()
        };
        self.results.clear();
        self.total_count = 0;
        self.failed = false;
        self.message.clear();
    }
}
