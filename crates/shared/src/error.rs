use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("empty style value")]
    Empty,
    #[error("invalid grid track `{0}`")]
    InvalidTrack(String),
    #[error("invalid repeat() expression `{0}`")]
    InvalidRepeat(String),
    #[error("invalid length `{0}`")]
    InvalidLength(String),
    #[error("invalid alignment `{0}`")]
    InvalidAlignment(String),
}
