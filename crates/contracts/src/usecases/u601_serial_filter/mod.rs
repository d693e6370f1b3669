pub mod file_rules;
pub mod request;
pub mod response;
pub mod results;
pub mod session;
pub mod status;

pub use file_rules::{validate_file, FileRejection, SelectedFile, MAX_UPLOAD_BYTES};
pub use request::{FilterRequest, SearchCriteria, SearchMode, ValidationError};
pub use response::{parse_reply, ApiAction, ApiError, FilterResponse, SerialRecord, StatusResponse, UploadResponse};
pub use results::{ResultsBody, ResultsTable, ResultsView, DISPLAY_LIMIT};
pub use session::{FilterOutcome, SerialFilterSession};
pub use status::{UploadPhase, UploadStatus};

use crate::usecases::common::UseCaseMetadata;

pub struct SerialFilter;

impl UseCaseMetadata for SerialFilter {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "serial_filter"
    }

    fn display_name() -> &'static str {
        "Serial Number Filter"
    }

    fn description() -> &'static str {
        "Upload Excel file and filter activated serials by range or retailer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_index_and_name() {
        assert_eq!(SerialFilter::full_name(), "u601_serial_filter");
    }
}
