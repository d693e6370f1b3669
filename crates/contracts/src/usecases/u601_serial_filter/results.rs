//! Модель отображения результата фильтрации.
//!
//! Колонки таблицы берутся из набора ключей первой записи. Backend обязан
//! присылать записи с одинаковым набором ключей; отклонения не
//! исправляются, а лишь отмечаются в `ResultsTable::first_mismatch`.

use super::request::SearchMode;
use super::response::{FilterResponse, SerialRecord};
use serde_json::Value;

/// Сколько записей показывается в таблице
pub const DISPLAY_LIMIT: usize = 100;

pub const TRUNCATION_HINT: &str =
    "Showing first 100 results. Download full report for complete data.";

pub const NO_RESULTS_TEXT: &str = "No activated serials found for the given criteria.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub total_label: &'static str,
    pub total: u64,
    pub activated_count: u64,
    /// Процент активации как прислал сервер, со знаком "%"
    pub activation_rate: String,
    pub body: ResultsBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    /// Сервер не прислал `activated_serials`
    SummaryOnly,
    /// Список есть, но пустой
    NoResults,
    Table(ResultsTable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub title: String,
    /// Ключи записей в порядке первой записи
    pub columns: Vec<String>,
    /// Заголовки: ключи с "_" заменёнными на пробелы
    pub headers: Vec<String>,
    /// Текст ячеек, не более `DISPLAY_LIMIT` строк
    pub rows: Vec<Vec<String>>,
    pub truncated: bool,
    /// Индекс первой записи, чьи ключи отличаются от первой
    pub first_mismatch: Option<usize>,
}

impl ResultsView {
    pub fn build(mode: SearchMode, response: &FilterResponse) -> Self {
        let body = match response.activated_serials.as_deref() {
            None => ResultsBody::SummaryOnly,
            Some([]) => ResultsBody::NoResults,
            Some(records) => ResultsBody::Table(ResultsTable::build(response, records)),
        };

        Self {
            total_label: mode.total_label(),
            total: response.total(),
            activated_count: response.activated_count,
            activation_rate: format!("{}%", response.activation_rate),
            body,
        }
    }
}

impl ResultsTable {
    fn build(response: &FilterResponse, records: &[SerialRecord]) -> Self {
        let columns: Vec<String> = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let headers = columns.iter().map(|key| header_label(key)).collect();

        let rows = records
            .iter()
            .take(DISPLAY_LIMIT)
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell_text(record.get(column)))
                    .collect()
            })
            .collect();

        let first_mismatch = records.iter().position(|record| {
            record.len() != columns.len() || columns.iter().any(|c| !record.contains_key(c))
        });

        let mut title = "Activated Serials (First 100)".to_string();
        if response.has_date_column {
            if let Some(name) = &response.date_column_name {
                title.push_str(&format!(" - Date column: {}", name));
            }
        }

        Self {
            title,
            columns,
            headers,
            rows,
            truncated: records.len() >= DISPLAY_LIMIT,
            first_mismatch,
        }
    }
}

/// "item_serial_number" -> "item serial number"
pub fn header_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Текст ячейки: null и отсутствующее значение -> "-"
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(value) => value_text(value),
    }
}

/// Текст примитивного значения так, как его показал бы браузер:
/// строки без кавычек, целые float без ".0" (254700000001.0 -> "254700000001")
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => number_text(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

// Экспоненциальная запись, как в JS, начинается с 1e21
fn number_text(f: f64) -> String {
    if !f.is_finite() || f.abs() >= 1e21 {
        return format!("{:e}", f);
    }
    format!("{}", f)
}
