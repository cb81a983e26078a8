use std::path::PathBuf;

pub type StencilResult<T> = Result<T, StencilError>;

#[derive(thiserror::Error, Debug)]
pub enum StencilError {
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("no content pixels found to crop to")]
    EmptyContent,

    #[error("failed to encode stencil: {0}")]
    Encode(#[source] image::ImageError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl StencilError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
