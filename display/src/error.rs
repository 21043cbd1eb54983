use thiserror::Error;

/// SDL reports most failures as bare strings
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl: {0}")]
    Sdl(String),
}
