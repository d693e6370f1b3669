//! Правила приёма файла выгрузки перед отправкой на backend.
//!
//! Одинаково применяются к файлу из диалога выбора и к файлу,
//! перетащенному в drop-зону.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Максимальный размер загружаемого файла (включительно)
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// MIME-типы Excel, которые принимаются без проверки расширения
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

/// Браузеры иногда не заполняют MIME-тип для этих расширений
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

/// Файл, выбранный пользователем (только метаданные)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Размер в человекочитаемом виде, например "1.5 KB"
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Причина отказа в приёме файла. `Display` — готовый текст для пользователя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("Invalid file type. Please upload .xlsx or .xls files only.")]
    InvalidType,
    #[error("File size exceeds 16MB limit.")]
    TooLarge,
}

/// Проверяет тип, затем размер файла.
pub fn validate_file(file: &SelectedFile) -> Result<(), FileRejection> {
    let mime_ok = ACCEPTED_MIME_TYPES.contains(&file.mime.as_str());
    let extension_ok = ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| file.name.ends_with(ext));

    if !mime_ok && !extension_ok {
        return Err(FileRejection::InvalidType);
    }

    if file.size > MAX_UPLOAD_BYTES {
        return Err(FileRejection::TooLarge);
    }

    Ok(())
}

/// Форматирует размер в байтах: "0 Bytes", "512 Bytes", "1.5 KB", "5 MB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Два знака после запятой, хвостовые нули отбрасываются
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

    #[test]
    fn test_accepts_known_mime_type() {
        let file = SelectedFile::new("data", 1024, XLSX_MIME);
        assert_eq!(validate_file(&file), Ok(()));

        let legacy = SelectedFile::new("data", 1024, "application/vnd.ms-excel");
        assert_eq!(validate_file(&legacy), Ok(()));
    }

    #[test]
    fn test_accepts_extension_without_mime() {
        assert_eq!(validate_file(&SelectedFile::new("march.xlsx", 10, "")), Ok(()));
        assert_eq!(validate_file(&SelectedFile::new("old.xls", 10, "")), Ok(()));
    }

    #[test]
    fn test_rejects_csv() {
        let file = SelectedFile::new("report.csv", 2048, "text/csv");
        let err = validate_file(&file).unwrap_err();
        assert_eq!(err, FileRejection::InvalidType);
        assert!(err.to_string().starts_with("Invalid file type"));
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        let file = SelectedFile::new("REPORT.XLSX", 10, "");
        assert_eq!(validate_file(&file), Err(FileRejection::InvalidType));
    }

    #[test]
    fn test_size_boundary() {
        let at_limit = SelectedFile::new("a.xlsx", MAX_UPLOAD_BYTES, XLSX_MIME);
        assert_eq!(validate_file(&at_limit), Ok(()));

        let over = SelectedFile::new("a.xlsx", MAX_UPLOAD_BYTES + 1, XLSX_MIME);
        assert_eq!(validate_file(&over), Err(FileRejection::TooLarge));
        assert_eq!(
            FileRejection::TooLarge.to_string(),
            "File size exceeds 16MB limit."
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = SelectedFile::new("huge.csv", MAX_UPLOAD_BYTES * 2, "text/csv");
        assert_eq!(validate_file(&file), Err(FileRejection::InvalidType));
    }

    #[test]
    fn test_five_megabyte_workbook_accepted() {
        let file = SelectedFile::new("march.xlsx", 5 * 1024 * 1024, XLSX_MIME);
        assert_eq!(validate_file(&file), Ok(()));
        assert_eq!(file.display_size(), "5 MB");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }
}
