use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Customer name is missing or blank")]
    MissingName,

    #[error("Invalid meal type: {0}")]
    UnknownMealType(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
