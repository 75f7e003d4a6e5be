use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("API Error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Malformed Response: {0}")]
    MalformedResponse(String),

    #[error("Config Error: {0}")]
    Config(String),
}
