use thiserror::Error;

pub type SvResult<T> = Result<T, SvError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Division by zero: {what}")]
    DivisionByZero { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
