use greenmap_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no location selected")]
    NoLocation,

    #[error("no accessibility score is displayed")]
    NoScores,

    #[error(transparent)]
    Client(#[from] ClientError),
}
