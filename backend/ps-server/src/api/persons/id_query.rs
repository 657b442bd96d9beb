use serde::Deserialize;

/// `?id=<uuid>`
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}
