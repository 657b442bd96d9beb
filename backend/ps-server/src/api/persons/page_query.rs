use serde::Deserialize;

/// `?page=<n>`; kept as text, the repository decides what a bad value means
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: String,
}
