use thiserror::Error;

/// Telesis format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("document has no $NETS section marker")]
    MissingNetsSection,
}
