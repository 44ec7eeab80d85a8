use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountdownError {
    #[error("invalid tick period: {0}")]
    InvalidPeriod(String),

    #[error("surface '{0}' already has a running countdown")]
    DuplicateSurface(String),

    #[error("countdown task for surface '{id}' failed")]
    Join {
        id: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("display surface is closed")]
    Closed,

    #[error("display surface state is poisoned")]
    Poisoned,
}
