use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("catalog integrity error: {0}")]
    Catalog(String),

    #[error("unknown {category} choice: {id}")]
    UnknownChoice { category: String, id: String },

    #[error("continue requires at least one selection")]
    NoSelection,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompassError>;
