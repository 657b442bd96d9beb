use ps_core::Person;

/// Creates an unsaved Person with sensible defaults
pub fn create_test_person() -> Person {
    Person::new("Alexey".to_string(), "Sidorov".to_string(), 18)
}

/// Creates an unsaved Person with a login
pub fn create_test_person_with_login(login: &str) -> Person {
    Person::new("Petr".to_string(), "Sidorov".to_string(), 21).with_login(login)
}

/// Creates `count` unsaved persons with distinct names
pub fn create_test_persons(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| Person::new(format!("First{}", i), format!("Last{}", i), 20 + (i as i32 % 50)))
        .collect()
}
