use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// The document or one of its entries does not have the shape the renamer needs.
    /// Nothing has been rewritten when this is returned.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl RenameError {
    pub fn malformed<T: ToString>(msg: T) -> Self {
        RenameError::MalformedInput(msg.to_string())
    }
}
