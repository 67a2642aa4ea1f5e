#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Target signature must not be empty")]
    EmptySignature,

    #[error("Duration `{0}` must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("Failed to parse TOML: {0}")]
    DeserializeTOML(#[from] toml_edit::de::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
