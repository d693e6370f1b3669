use super::response::{StatusResponse, UploadResponse};
use serde::{Deserialize, Serialize};

/// Состояние набора данных на backend, как его видит клиент
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadStatus {
    pub loaded: bool,
    pub rows: Option<u64>,
    pub columns: Vec<String>,
    pub message: Option<String>,
    /// Unix-секунды
    pub last_modified: Option<f64>,
}

impl UploadStatus {
    /// `None`, если на сервере ничего не загружено
    pub fn from_status(reply: StatusResponse) -> Option<Self> {
        if !reply.loaded {
            return None;
        }
        Some(Self {
            loaded: true,
            rows: reply.rows,
            columns: Vec::new(),
            message: None,
            last_modified: reply.last_modified,
        })
    }

    pub fn from_upload(reply: UploadResponse) -> Self {
        Self {
            loaded: true,
            rows: reply.rows,
            columns: reply.columns,
            message: reply.message,
            last_modified: None,
        }
    }

    /// "1200 rows loaded from Excel file"
    pub fn rows_caption(&self) -> Option<String> {
        self.rows
            .map(|rows| format!("{} rows loaded from Excel file", rows))
    }
}

/// Фаза блока загрузки. В каждый момент верна ровно одна.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    NoFile,
    FileSelected,
    Uploading,
    Uploaded,
}

impl UploadPhase {
    /// Выбранный файл важнее завершённой загрузки: пользователь может
    /// заменить уже загруженный набор данных.
    pub fn derive(has_file: bool, uploading: bool, loaded: bool) -> Self {
        match (has_file, uploading, loaded) {
            (_, true, _) => UploadPhase::Uploading,
            (true, false, _) => UploadPhase::FileSelected,
            (false, false, true) => UploadPhase::Uploaded,
            (false, false, false) => UploadPhase::NoFile,
        }
    }
}
