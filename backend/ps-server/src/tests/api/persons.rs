use crate::{PersonDeleteResponse, PersonRequest, PersonResponse};

use ps_core::Person;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

#[test]
fn test_request_without_id_maps_to_unassigned_person() {
    let request: PersonRequest =
        serde_json::from_str(r#"{"firstName":"Alexey","lastName":"Sidorov","age":18}"#).unwrap();

    let person = Person::from(request);

    assert!(person.is_unassigned());
    assert_eq!(person.first_name, "Alexey");
    assert_eq!(person.last_name, "Sidorov");
    assert_eq!(person.age, 18);
    assert_eq!(person.login, None);
}

#[test]
fn test_request_with_null_id_maps_to_unassigned_person() {
    let request: PersonRequest = serde_json::from_str(
        r#"{"id":null,"firstName":"A","lastName":"B","age":1,"login":"ab"}"#,
    )
    .unwrap();

    let person = Person::from(request);

    assert_eq!(person.id, Uuid::nil());
    assert_eq!(person.login.as_deref(), Some("ab"));
}

#[test]
fn test_request_with_nil_id_maps_to_unassigned_person() {
    let request: PersonRequest = serde_json::from_str(
        r#"{"id":"00000000-0000-0000-0000-000000000000","firstName":"A","lastName":"B","age":1}"#,
    )
    .unwrap();

    assert!(Person::from(request).is_unassigned());
}

#[test]
fn test_request_with_id_and_timestamp_keeps_both() {
    let id = Uuid::new_v4();
    let json = format!(
        r#"{{"id":"{}","firstName":"A","lastName":"B","age":1,"timestamp":"2024-01-02T03:04:05Z"}}"#,
        id
    );
    let request: PersonRequest = serde_json::from_str(&json).unwrap();

    let person = Person::from(request);

    assert_eq!(person.id, id);
    assert_eq!(
        person.last_update,
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    );
}

#[test]
fn test_request_with_malformed_id_fails_to_deserialize() {
    let result: Result<PersonRequest, _> =
        serde_json::from_str(r#"{"id":"nope","firstName":"A","lastName":"B","age":1}"#);

    assert!(result.is_err());
}

#[test]
fn test_response_uses_camel_case_and_omits_missing_login() {
    let person = Person::new("Alexey".into(), "Sidorov".into(), 18);

    let json = serde_json::to_value(PersonResponse::from(person.clone())).unwrap();

    assert_eq!(json["firstName"], "Alexey");
    assert_eq!(json["lastName"], "Sidorov");
    assert_eq!(json["age"], 18);
    assert_eq!(json["id"], Uuid::nil().to_string());
    assert!(json.get("timestamp").is_some());
    assert!(json.get("login").is_none());

    let with_login = serde_json::to_value(PersonResponse::from(person.with_login("asid"))).unwrap();
    assert_eq!(with_login["login"], "asid");
}

#[test]
fn test_delete_response_message() {
    let response = PersonDeleteResponse::deleted("abc");

    assert_eq!(response.message, "Person with id: abc was successfully deleted");
}
