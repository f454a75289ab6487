use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
    #[error("index {index} is out of range for a set of {bound} elements")]
    IndexOutOfRange { index: usize, bound: usize },
    #[error("site ({row}, {col}) is outside of a {size}x{size} grid")]
    SiteOutOfRange { row: usize, col: usize, size: usize },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Both element-id and grid-coordinate violations count as out of range.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::SiteOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn ensure_positive(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::InvalidArgument { name, value });
    }
    Ok(value)
}
