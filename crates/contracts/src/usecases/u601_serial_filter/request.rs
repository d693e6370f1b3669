use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Режим поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// По диапазону серийных номеров
    #[default]
    Serial,
    /// По MSISDN ретейлера
    Retailer,
}

impl SearchMode {
    /// Путь endpoint относительно базового URL API
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchMode::Serial => "/filter",
            SearchMode::Retailer => "/filter-retailer",
        }
    }

    /// Подпись итогового количества в блоке результатов
    pub fn total_label(&self) -> &'static str {
        match self {
            SearchMode::Serial => "Total in Range",
            SearchMode::Retailer => "Total for Retailer",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            SearchMode::Serial => "Filter Serials",
            SearchMode::Retailer => "Filter by Retailer",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SearchMode::Serial => "Filter by Serial Range",
            SearchMode::Retailer => "Filter by Retailer MSISDN",
        }
    }
}

/// Критерии поиска в том виде, в каком их ввёл пользователь
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchCriteria {
    Serial {
        start_serial: String,
        end_serial: String,
        #[serde(default)]
        start_date: String,
        #[serde(default)]
        end_date: String,
    },
    Retailer {
        retailer_msisdn: String,
        #[serde(default)]
        start_date: String,
        #[serde(default)]
        end_date: String,
    },
}

/// Ошибка проверки формы до отправки запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both start and end serial numbers")]
    MissingSerialBounds,
    #[error("Please enter retailer MSISDN")]
    MissingRetailer,
    #[error("Please upload an Excel file first")]
    NothingUploaded,
    #[error("Please select a file first")]
    NoFileSelected,
}

/// Тело POST /filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialRangeFilterRequest {
    pub start_serial: String,
    pub end_serial: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Тело POST /filter-retailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailerFilterRequest {
    pub retailer_msisdn: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Готовый к отправке запрос фильтрации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRequest {
    SerialRange(SerialRangeFilterRequest),
    Retailer(RetailerFilterRequest),
}

impl FilterRequest {
    pub fn mode(&self) -> SearchMode {
        match self {
            FilterRequest::SerialRange(_) => SearchMode::Serial,
            FilterRequest::Retailer(_) => SearchMode::Retailer,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode().endpoint()
    }

    /// JSON-тело запроса
    pub fn to_json(&self) -> serde_json::Value {
        // Сериализация плоских структур из строк не может завершиться ошибкой
        match self {
            FilterRequest::SerialRange(body) => serde_json::json!(body),
            FilterRequest::Retailer(body) => serde_json::json!(body),
        }
    }
}

/// Пустое поле даты отправляется как null, а не как ""
fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl SearchCriteria {
    pub fn mode(&self) -> SearchMode {
        match self {
            SearchCriteria::Serial { .. } => SearchMode::Serial,
            SearchCriteria::Retailer { .. } => SearchMode::Retailer,
        }
    }

    /// Проверяет обязательные поля и наличие загруженного набора данных.
    ///
    /// Порядок проверок: поля режима, затем `dataset_loaded`.
    /// `Ok` означает, что запрос можно отправлять; при `Err` сетевой вызов
    /// делать нельзя.
    pub fn validate(&self, dataset_loaded: bool) -> Result<FilterRequest, ValidationError> {
        let request = match self {
            SearchCriteria::Serial {
                start_serial,
                end_serial,
                start_date,
                end_date,
            } => {
                if start_serial.is_empty() || end_serial.is_empty() {
                    return Err(ValidationError::MissingSerialBounds);
                }
                FilterRequest::SerialRange(SerialRangeFilterRequest {
                    start_serial: start_serial.clone(),
                    end_serial: end_serial.clone(),
                    start_date: blank_to_none(start_date),
                    end_date: blank_to_none(end_date),
                })
            }
            SearchCriteria::Retailer {
                retailer_msisdn,
                start_date,
                end_date,
            } => {
                if retailer_msisdn.is_empty() {
                    return Err(ValidationError::MissingRetailer);
                }
                FilterRequest::Retailer(RetailerFilterRequest {
                    retailer_msisdn: retailer_msisdn.clone(),
                    start_date: blank_to_none(start_date),
                    end_date: blank_to_none(end_date),
                })
            }
        };

        if !dataset_loaded {
            return Err(ValidationError::NothingUploaded);
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn serial(start: &str, end: &str) -> SearchCriteria {
        SearchCriteria::Serial {
            start_serial: start.to_string(),
            end_serial: end.to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    fn retailer(msisdn: &str) -> SearchCriteria {
        SearchCriteria::Retailer {
            retailer_msisdn: msisdn.to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    #[test]
    fn test_serial_bounds_required() {
        assert_eq!(
            serial("", "2").validate(true),
            Err(ValidationError::MissingSerialBounds)
        );
        assert_eq!(
            serial("1", "").validate(true),
            Err(ValidationError::MissingSerialBounds)
        );
        assert_eq!(
            ValidationError::MissingSerialBounds.to_string(),
            "Please enter both start and end serial numbers"
        );
    }

    #[test]
    fn test_retailer_required() {
        let err = retailer("").validate(true).unwrap_err();
        assert_eq!(err, ValidationError::MissingRetailer);
        assert_eq!(err.to_string(), "Please enter retailer MSISDN");
    }

    #[test]
    fn test_upload_required() {
        let err = serial("1", "2").validate(false).unwrap_err();
        assert_eq!(err, ValidationError::NothingUploaded);
        assert_eq!(err.to_string(), "Please upload an Excel file first");

        assert_eq!(
            retailer("0712345678").validate(false),
            Err(ValidationError::NothingUploaded)
        );
    }

    #[test]
    fn test_field_checks_precede_upload_check() {
        assert_eq!(
            serial("", "").validate(false),
            Err(ValidationError::MissingSerialBounds)
        );
        assert_eq!(
            retailer("").validate(false),
            Err(ValidationError::MissingRetailer)
        );
    }

    #[test]
    fn test_serial_request_body_uses_null_dates() {
        let request = serial("8925403506100176553", "8925403506100176800")
            .validate(true)
            .unwrap();
        assert_eq!(request.endpoint(), "/filter");
        assert_eq!(
            request.to_json(),
            json!({
                "start_serial": "8925403506100176553",
                "end_serial": "8925403506100176800",
                "start_date": null,
                "end_date": null,
            })
        );
    }

    #[test]
    fn test_retailer_request_body_keeps_dates() {
        let criteria = SearchCriteria::Retailer {
            retailer_msisdn: "254700000001".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: String::new(),
        };
        let request = criteria.validate(true).unwrap();
        assert_eq!(request.mode(), SearchMode::Retailer);
        assert_eq!(request.endpoint(), "/filter-retailer");
        assert_eq!(
            request.to_json(),
            json!({
                "retailer_msisdn": "254700000001",
                "start_date": "2024-03-01",
                "end_date": null,
            })
        );
    }
}
