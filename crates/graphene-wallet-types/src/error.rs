use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("unknown chain: {0}")]
    UnknownChain(String),

    #[error("chain {0} has no configured nodes")]
    NoNodes(String),

    #[error("invalid node url {url}: {source}")]
    InvalidNodeUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
