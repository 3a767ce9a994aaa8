#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),
}
