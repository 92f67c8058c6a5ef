pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a username is required to build a contribution graph")]
    MissingUsername,

    #[error("invalid contribution date `{date}` for organization `{organization}` (expected YYYY-MM-DD)")]
    InvalidDate { organization: String, date: String },

    #[error("daily counts JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
