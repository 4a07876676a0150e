#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(value: rust_decimal::Error) -> Self {
        Self::Invalid {
            field: "quantity",
            reason: value.to_string(),
        }
    }
}

#[macro_export]
macro_rules! invalid {
    ($field:literal, $msg:literal $(,)?) => {
        return Err($crate::Error::Invalid { field: $field, reason: format!($msg) })
    };
    ($field:literal, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invalid { field: $field, reason: format!($fmt, $($arg)*) })
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}
