use serde::de::DeserializeOwned;
use super::results::value_text;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Ответ GET /status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub loaded: bool,
    #[serde(default)]
    pub rows: Option<u64>,
    /// Время изменения загруженного файла, Unix-секунды
    #[serde(default)]
    pub last_modified: Option<f64>,
}

/// Ответ POST /upload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub rows: Option<u64>,
    /// Заголовки колонок файла; нестроковые (например, 2024) приводятся к тексту
    #[serde(default, deserialize_with = "lenient_labels")]
    pub columns: Vec<String>,
}

/// Необязательные метаданные не должны ломать разбор ответа:
/// любой элемент приводится к строке, не-массив даёт пустой список
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Одна найденная запись: имя колонки -> примитивное значение.
/// Порядок ключей сохраняется таким, как его прислал сервер.
pub type SerialRecord = Map<String, Value>;

/// Ответ POST /filter и POST /filter-retailer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    /// Заполняется для поиска по диапазону
    #[serde(default)]
    pub total_in_range: Option<u64>,
    /// Заполняется для поиска по ретейлеру
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub activated_count: u64,
    /// Процент, уже округлённый сервером
    #[serde(default)]
    pub activation_rate: f64,
    #[serde(default)]
    pub activated_serials: Option<Vec<SerialRecord>>,
    #[serde(default)]
    pub has_date_column: bool,
    #[serde(default)]
    pub date_column_name: Option<String>,
}

impl FilterResponse {
    /// Итог: `total_in_range`, иначе `total_count`
    pub fn total(&self) -> u64 {
        self.total_in_range.or(self.total_count).unwrap_or(0)
    }
}

/// Действие пользователя, от которого зависят тексты ошибок
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    Status,
    Upload,
    Filter,
}

impl ApiAction {
    fn fallback(&self) -> &'static str {
        match self {
            ApiAction::Status => "Status check failed",
            ApiAction::Upload => "Upload failed",
            ApiAction::Filter => "Filter failed",
        }
    }
}

/// Ошибка обращения к backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не завершился: нет соединения, CORS и т.п.
    #[error("transport error: {0}")]
    Transport(String),
    /// Сервер ответил ошибкой; текст из поля `error`, если он был
    #[error("server error: {}", .0.as_deref().unwrap_or("<no message>"))]
    Server(Option<String>),
}

impl ApiError {
    /// Текст для пользователя. `backend` — ожидаемый адрес API,
    /// подставляется в подсказку при сетевой ошибке.
    pub fn user_message(&self, action: ApiAction, backend: &str) -> String {
        match (self, action) {
            (ApiError::Server(Some(message)), _) => message.clone(),
            (ApiError::Server(None), action) => action.fallback().to_string(),
            (ApiError::Transport(_), ApiAction::Upload) => format!(
                "Error uploading file. Make sure the backend server is running at {}.",
                backend
            ),
            (ApiError::Transport(cause), ApiAction::Filter) => format!(
                "Error filtering serials: {}. Make sure the backend server is running at {}.",
                cause, backend
            ),
            (ApiError::Transport(cause), ApiAction::Status) => format!(
                "Error checking status: {}. Make sure the backend server is running at {}.",
                cause, backend
            ),
        }
    }
}

/// Разбирает завершившийся HTTP-ответ.
///
/// Успех только при 2xx, корректном JSON и отсутствии поля `error`.
/// Во всех остальных случаях `ApiError::Server` с текстом из `error`,
/// если сервер его прислал.
pub fn parse_reply<T: DeserializeOwned>(ok: bool, body: &str) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| ApiError::Server(None))?;

    let error = value.get("error").filter(|e| !e.is_null()).map(|e| match e {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    });

    if !ok || error.is_some() {
        return Err(ApiError::Server(error));
    }

    serde_json::from_value(value).map_err(|_| ApiError::Server(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND: &str = "http://localhost:5000/api";

    #[test]
    fn test_filter_reply_success() {
        let body = r#"{
            "total_in_range": 42,
            "activated_count": 10,
            "activation_rate": 23.81,
            "activated_serials": [],
            "has_date_column": false,
            "date_column_name": null
        }"#;
        let reply: FilterResponse = parse_reply(true, body).unwrap();
        assert_eq!(reply.total(), 42);
        assert_eq!(reply.activated_count, 10);
        assert_eq!(reply.activation_rate, 23.81);
        assert_eq!(reply.activated_serials, Some(vec![]));
    }

    #[test]
    fn test_total_falls_back_to_total_count() {
        let reply: FilterResponse =
            parse_reply(true, r#"{"total_count": 7, "activated_count": 3, "activation_rate": 42.86}"#)
                .unwrap();
        assert_eq!(reply.total(), 7);
        assert_eq!(reply.activated_serials, None);
    }

    #[test]
    fn test_error_field_on_success_status_is_failure() {
        let result: Result<FilterResponse, _> =
            parse_reply(true, r#"{"error": "Serial number column not found"}"#);
        assert_eq!(
            result,
            Err(ApiError::Server(Some("Serial number column not found".to_string())))
        );
    }

    #[test]
    fn test_non_success_without_error_field() {
        let result: Result<UploadResponse, _> = parse_reply(false, r#"{"detail": "x"}"#);
        let err = result.unwrap_err();
        assert_eq!(err, ApiError::Server(None));
        assert_eq!(err.user_message(ApiAction::Upload, BACKEND), "Upload failed");
        assert_eq!(err.user_message(ApiAction::Filter, BACKEND), "Filter failed");
    }

    #[test]
    fn test_non_success_passes_server_message() {
        let err = parse_reply::<UploadResponse>(false, r#"{"error": "Invalid data file"}"#)
            .unwrap_err();
        assert_eq!(err.user_message(ApiAction::Upload, BACKEND), "Invalid data file");
    }

    #[test]
    fn test_invalid_json_is_server_error() {
        let err = parse_reply::<StatusResponse>(true, "<html>oops</html>").unwrap_err();
        assert_eq!(err, ApiError::Server(None));
    }

    #[test]
    fn test_upload_reply_fields() {
        let reply: UploadResponse = parse_reply(
            true,
            r#"{"message": "File uploaded successfully", "rows": 1200, "columns": ["item_serial_number", "servedmsisdn"]}"#,
        )
        .unwrap();
        assert_eq!(reply.rows, Some(1200));
        assert_eq!(reply.columns.len(), 2);
    }

    #[test]
    fn test_upload_reply_with_numeric_header() {
        let reply: UploadResponse = parse_reply(
            true,
            r#"{"message":"File uploaded successfully","rows":12,"columns":["item_serial_number",2024]}"#,
        )
        .unwrap();
        assert_eq!(reply.rows, Some(12));
        assert_eq!(reply.columns, vec!["item_serial_number", "2024"]);
    }

    #[test]
    fn test_upload_reply_with_malformed_columns() {
        let reply: UploadResponse =
            parse_reply(true, r#"{"rows": 3, "columns": "not a list"}"#).unwrap();
        assert_eq!(reply.rows, Some(3));
        assert!(reply.columns.is_empty());
    }

    #[test]
    fn test_status_reply_not_loaded() {
        let reply: StatusResponse = parse_reply(true, r#"{"loaded": false}"#).unwrap();
        assert!(!reply.loaded);
        assert_eq!(reply.rows, None);
    }

    #[test]
    fn test_transport_messages_name_backend() {
        let err = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(
            err.user_message(ApiAction::Upload, BACKEND),
            "Error uploading file. Make sure the backend server is running at http://localhost:5000/api."
        );
        assert_eq!(
            err.user_message(ApiAction::Filter, BACKEND),
            "Error filtering serials: Failed to fetch. Make sure the backend server is running at http://localhost:5000/api."
        );
    }
}
