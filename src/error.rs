#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    #[error("unknown browser family {0:?} in rule table")]
    UnknownBrowser(String),
    #[error("empty token in rule for {browser}")]
    EmptyToken { browser: crate::Browser },
}

pub type Result<T> = std::result::Result<T, Error>;
