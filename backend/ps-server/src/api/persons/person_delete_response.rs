use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PersonDeleteResponse {
    pub message: String,
}

impl PersonDeleteResponse {
    pub fn deleted(id: &str) -> Self {
        Self {
            message: format!("Person with id: {} was successfully deleted", id),
        }
    }
}
