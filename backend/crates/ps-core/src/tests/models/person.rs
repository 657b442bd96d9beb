use crate::Person;

use uuid::Uuid;

#[test]
fn test_person_new_is_unassigned() {
    let person = Person::new("Alexey".to_string(), "Sidorov".to_string(), 18);

    assert_eq!(person.id, Uuid::nil());
    assert_eq!(person.first_name, "Alexey");
    assert_eq!(person.last_name, "Sidorov");
    assert_eq!(person.age, 18);
    assert_eq!(person.login, None);
    assert!(person.is_unassigned());
}

#[test]
fn test_person_with_assigned_id() {
    let mut person = Person::new("Petr".to_string(), "Sidorov".to_string(), 21);

    person.id = Uuid::new_v4();

    assert!(!person.is_unassigned());
}

#[test]
fn test_person_with_login() {
    let person = Person::new("Petr".to_string(), "Sidorov".to_string(), 21).with_login("psidorov");

    assert_eq!(person.login.as_deref(), Some("psidorov"));
}
