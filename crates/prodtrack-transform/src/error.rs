use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] prodtrack_model::ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
