use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeomError {
    #[error("Zero length:{0}")]
    ZeroLength(String),

    #[error("Non finite value:{0}")]
    NonFinite(String),

    #[error("Transform is not invertible, determinant:{0}")]
    NonInvertible(f64),
}

pub type Result<T> = std::result::Result<T, GeomError>;
