//! Переходы состояния страницы фильтра без привязки к UI.
//!
//! Каждый обработчик события UI сводится к вызову одного метода
//! `SerialFilterSession`; сетевые вызовы делает вызывающая сторона.

use super::file_rules::{validate_file, FileRejection, SelectedFile};
use super::request::{FilterRequest, SearchCriteria, SearchMode, ValidationError};
use super::response::{ApiAction, ApiError, FilterResponse, StatusResponse, UploadResponse};
use super::status::{UploadPhase, UploadStatus};

/// Результат фильтрации вместе с режимом, которым он получен
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub mode: SearchMode,
    pub response: FilterResponse,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerialFilterSession {
    pub selected_file: Option<SelectedFile>,
    pub upload_status: Option<UploadStatus>,
    pub upload_loading: bool,
    pub results: Option<FilterOutcome>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SerialFilterSession {
    pub fn is_loaded(&self) -> bool {
        self.upload_status.as_ref().is_some_and(|s| s.loaded)
    }

    pub fn upload_phase(&self) -> UploadPhase {
        UploadPhase::derive(
            self.selected_file.is_some(),
            self.upload_loading,
            self.is_loaded(),
        )
    }

    /// Ответ /status; "не загружено" ничего не меняет
    pub fn apply_status(&mut self, reply: StatusResponse) {
        if let Some(status) = UploadStatus::from_status(reply) {
            self.upload_status = Some(status);
        }
    }

    /// При отказе выбранный ранее файл остаётся
    pub fn select_file(&mut self, candidate: SelectedFile) -> Result<(), FileRejection> {
        if let Err(rejection) = validate_file(&candidate) {
            self.error = Some(rejection.to_string());
            return Err(rejection);
        }
        self.selected_file = Some(candidate);
        self.error = None;
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.selected_file = None;
        self.error = None;
    }

    /// `true`, если запрос загрузки нужно отправить
    pub fn begin_upload(&mut self) -> bool {
        if self.upload_loading {
            return false;
        }
        if self.selected_file.is_none() {
            self.error = Some(ValidationError::NoFileSelected.to_string());
            return false;
        }
        self.upload_loading = true;
        self.error = None;
        true
    }

    /// `backend` подставляется в текст сетевой ошибки
    pub fn finish_upload(&mut self, reply: Result<UploadResponse, ApiError>, backend: &str) {
        self.upload_loading = false;
        match reply {
            Ok(reply) => {
                self.upload_status = Some(UploadStatus::from_upload(reply));
                self.selected_file = None;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.user_message(ApiAction::Upload, backend));
            }
        }
    }

    /// Проверяет форму; `Some`: запрос, который нужно отправить.
    /// Предыдущий результат сбрасывается только при реальной отправке.
    pub fn begin_filter(&mut self, criteria: &SearchCriteria) -> Option<FilterRequest> {
        if self.loading {
            return None;
        }
        match criteria.validate(self.is_loaded()) {
            Ok(request) => {
                self.loading = true;
                self.error = None;
                self.results = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish_filter(
        &mut self,
        mode: SearchMode,
        reply: Result<FilterResponse, ApiError>,
        backend: &str,
    ) {
        self.loading = false;
        match reply {
            Ok(response) => {
                self.results = Some(FilterOutcome { mode, response });
            }
            Err(e) => {
                self.results = None;
                self.error = Some(e.user_message(ApiAction::Filter, backend));
            }
        }
    }
}
