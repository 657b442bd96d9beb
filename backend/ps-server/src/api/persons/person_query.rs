use serde::Deserialize;

/// `?id=<uuid>` or `?login=<login>`; `id` wins when both are present
#[derive(Debug, Deserialize)]
pub struct PersonQuery {
    pub id: Option<String>,
    pub login: Option<String>,
}
