use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.c".to_owned(),
        nombre: Some("Ana".to_owned()),
        rol: "admin".to_owned(),
    }
}

#[test]
fn save_then_load_round_trips() {
    clear();
    save("T", &sample_user());
    let (token, user) = load().expect("session persisted");
    assert_eq!(token, "T");
    assert_eq!(user, sample_user());
    assert_eq!(super::token().as_deref(), Some("T"));
    clear();
}

#[test]
fn clear_is_idempotent_and_empties_both_keys() {
    save("T", &sample_user());
    clear();
    clear();
    assert!(load().is_none());
    assert!(token().is_none());
}

#[test]
fn load_requires_both_keys() {
    clear();
    // Only a token, no user record.
    super::set_item("token", "T");
    assert!(load().is_none());
    assert_eq!(token().as_deref(), Some("T"));
    clear();
}

#[test]
fn save_overwrites_previous_session() {
    clear();
    save("T1", &sample_user());
    let mut other = sample_user();
    other.id = "u2".to_owned();
    save("T2", &other);
    let (token, user) = load().unwrap();
    assert_eq!(token, "T2");
    assert_eq!(user.id, "u2");
    clear();
}
