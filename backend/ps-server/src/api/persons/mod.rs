pub mod id_query;
pub mod page_query;
pub mod person_delete_response;
pub mod person_query;
pub mod person_request;
pub mod person_response;
pub mod persons;
