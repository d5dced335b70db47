#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Type '{name}' already has a color assigned")]
    DuplicateType { name: String },

    #[error("Template error: {0}")]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Global logger is already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Unmatched '{brace}' at position {position}")]
    UnmatchedBrace { brace: char, position: usize },

    #[error("Invalid placeholder index '{text}' at position {position}")]
    InvalidIndex { text: String, position: usize },

    #[error("Placeholder index {index} is out of range ({count} arguments)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Alignment width {width} at position {position} is too large")]
    AlignmentTooLarge { width: u64, position: usize },

    #[error("Format specifier ':{spec}' is not supported at position {position}")]
    UnsupportedFormatSpec { spec: String, position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
