use thiserror::Error;

pub type GrouperResult<T> = Result<T, GrouperError>;

#[derive(Error, Debug)]
pub enum GrouperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Decode(String),

    #[error("Missing columns: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    #[error("No data available for export")]
    EmptyData,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("Invalid sort: {0}")]
    InvalidSort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_headers_lists_every_name() {
        let err = GrouperError::MissingHeaders(vec!["Order key".to_string(), "Excl. VAT".to_string()]);
        assert_eq!(err.to_string(), "Missing columns: Order key, Excl. VAT");
    }

    #[test]
    fn test_empty_data_message() {
        assert_eq!(GrouperError::EmptyData.to_string(), "No data available for export");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GrouperError = io.into();
        assert!(matches!(err, GrouperError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
