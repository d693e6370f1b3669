use super::api;
use crate::shared::api_utils::api_base;
use contracts::usecases::u601_serial_filter::{
    ApiAction, FilterOutcome, SearchCriteria, SearchMode, SelectedFile, SerialFilterSession,
    UploadPhase, UploadStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Всё состояние страницы. Поля — сигналы, поэтому структура `Copy`
/// и свободно передаётся в дочерние компоненты и обработчики.
///
/// Переходы выполняет `SerialFilterSession`; здесь только сигналы,
/// поля формы и сетевые вызовы.
#[derive(Clone, Copy)]
pub struct SerialFilterState {
    session: RwSignal<SerialFilterSession>,
    /// Сам `File` не `Send`, поэтому хранится отдельно от метаданных
    file_handle: StoredValue<Option<web_sys::File>, LocalStorage>,
    pub is_dragging: RwSignal<bool>,

    pub search_mode: RwSignal<SearchMode>,
    pub start_serial: RwSignal<String>,
    pub end_serial: RwSignal<String>,
    pub retailer_msisdn: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl SerialFilterState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SerialFilterSession::default()),
            file_handle: StoredValue::new_local(None),
            is_dragging: RwSignal::new(false),
            search_mode: RwSignal::new(SearchMode::default()),
            start_serial: RwSignal::new(String::new()),
            end_serial: RwSignal::new(String::new()),
            retailer_msisdn: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
        }
    }

    pub fn selected_file(&self) -> Option<SelectedFile> {
        self.session.with(|s| s.selected_file.clone())
    }

    pub fn upload_status(&self) -> Option<UploadStatus> {
        self.session.with(|s| s.upload_status.clone())
    }

    pub fn upload_loading(&self) -> bool {
        self.session.with(|s| s.upload_loading)
    }

    pub fn results(&self) -> Option<FilterOutcome> {
        self.session.with(|s| s.results.clone())
    }

    pub fn loading(&self) -> bool {
        self.session.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.session.with(|s| s.error.clone())
    }

    pub fn is_loaded(&self) -> bool {
        self.session.with(|s| s.is_loaded())
    }

    pub fn upload_phase(&self) -> UploadPhase {
        self.session.with(|s| s.upload_phase())
    }

    /// Один запрос статуса при монтировании; ошибки только в лог
    pub fn probe_status(self) {
        spawn_local(async move {
            match api::get_status().await {
                Ok(reply) => {
                    if reply.loaded {
                        log::info!("Dataset already loaded: {:?} rows", reply.rows);
                    }
                    self.session.update(|s| s.apply_status(reply));
                }
                Err(e) => {
                    log::error!(
                        "Error checking status: {}",
                        e.user_message(ApiAction::Status, &api_base())
                    );
                }
            }
        });
    }

    /// Файл из диалога выбора или из drop-зоны
    pub fn accept_file(self, file: web_sys::File) {
        let candidate = SelectedFile::new(file.name(), file.size() as u64, file.type_());
        let name = candidate.name.clone();

        match self.session.try_update(|s| s.select_file(candidate)) {
            Some(Ok(())) => self.file_handle.set_value(Some(file)),
            Some(Err(rejection)) => log::warn!("File {} rejected: {}", name, rejection),
            None => {}
        }
    }

    pub fn remove_file(self) {
        self.session.update(|s| s.remove_file());
        self.file_handle.set_value(None);
    }

    pub fn upload(self) {
        if self.session.try_update(|s| s.begin_upload()) != Some(true) {
            return;
        }
        let Some(file) = self.file_handle.get_value() else {
            return;
        };

        spawn_local(async move {
            let reply = api::upload_file(file).await;
            match &reply {
                Ok(reply) => log::info!("Upload complete: {:?} rows", reply.rows),
                Err(e) => log::error!("Upload failed: {}", e),
            }
            let backend = api_base();
            self.session.update(|s| s.finish_upload(reply, &backend));
            if self.session.with_untracked(|s| s.selected_file.is_none()) {
                self.file_handle.set_value(None);
            }
        });
    }

    /// Переключение вкладки режима; введённые значения сохраняются
    pub fn set_mode(self, mode: SearchMode) {
        self.search_mode.set(mode);
    }

    fn criteria(&self) -> SearchCriteria {
        let start_date = self.start_date.get_untracked();
        let end_date = self.end_date.get_untracked();
        match self.search_mode.get_untracked() {
            SearchMode::Serial => SearchCriteria::Serial {
                start_serial: self.start_serial.get_untracked(),
                end_serial: self.end_serial.get_untracked(),
                start_date,
                end_date,
            },
            SearchMode::Retailer => SearchCriteria::Retailer {
                retailer_msisdn: self.retailer_msisdn.get_untracked(),
                start_date,
                end_date,
            },
        }
    }

    pub fn submit_filter(self) {
        let criteria = self.criteria();
        let Some(request) = self.session.try_update(|s| s.begin_filter(&criteria)).flatten()
        else {
            return;
        };

        spawn_local(async move {
            let reply = api::filter(&request).await;
            match &reply {
                Ok(response) => log::debug!(
                    "Results set successfully: {} activated",
                    response.activated_count
                ),
                Err(e) => log::error!("Filter error: {}", e),
            }
            let backend = api_base();
            self.session
                .update(|s| s.finish_filter(request.mode(), reply, &backend));
        });
    }
}
