use std::sync::Mutex;
use task_view_rs::notify::Notifier;
use task_view_rs::session::{Session, User};
use task_view_rs::store::memory::MemoryStore;
use task_view_rs::view::profile::{ProfileForm, SubmitOutcome};

fn signed_in_user() -> User {
    User {
        id: "user-7".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        role: "admin".to_string(),
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[test]
fn test_user_deserialize_rejects_unknown_fields() {
    // A drifted profile response must fail instead of being accepted
    let json = r#"{"id":"user-7","name":"Ada","email":"ada@example.com","role":"admin","avatar":"x.png"}"#;
    let result: Result<User, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_form_seeded_from_user_with_empty_password() {
    let form = ProfileForm::for_user(&signed_in_user());
    assert_eq!(form.name, "Ada");
    assert_eq!(form.email, "ada@example.com");
    assert!(form.password.is_empty());
}

#[tokio::test]
async fn test_submit_success_replaces_session_user() {
    let user = signed_in_user();
    let store = MemoryStore::with_user(user.clone());
    let mut session = Session::new(user.clone());
    let notifier = RecordingNotifier::default();

    let mut form = ProfileForm::for_user(&user);
    form.name = "Ada Lovelace".to_string();

    let outcome = form.submit(&store, &mut session, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(session.user().name, "Ada Lovelace");
    assert_eq!(session.user().email, "ada@example.com");
    assert_eq!(session.user().role, "admin");
    assert_eq!(
        *notifier.successes.lock().unwrap(),
        ["Profile updated successfully!"]
    );
}

#[tokio::test]
async fn test_submit_rejected_uses_server_message() {
    let user = signed_in_user();
    let store = MemoryStore::with_user(user.clone());
    store.reject_profile("Email already taken").await;
    let mut session = Session::new(user.clone());
    let notifier = RecordingNotifier::default();

    let mut form = ProfileForm::for_user(&user);
    form.email = "taken@example.com".to_string();

    let outcome = form.submit(&store, &mut session, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(session.user(), &user);
    assert_eq!(
        *notifier.errors.lock().unwrap(),
        ["Email already taken"]
    );
    // The draft stays as typed so the user can retry
    assert_eq!(form.email, "taken@example.com");
}

#[tokio::test]
async fn test_submit_rejects_empty_required_fields() {
    let user = signed_in_user();
    let store = MemoryStore::with_user(user.clone());
    let mut session = Session::new(user.clone());
    let notifier = RecordingNotifier::default();

    let mut form = ProfileForm::for_user(&user);
    form.name = String::new();

    let outcome = form.submit(&store, &mut session, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(
        *notifier.errors.lock().unwrap(),
        ["Name and email are required"]
    );
}

#[tokio::test]
async fn test_submit_transport_failure_shows_generic_message() {
    let user = signed_in_user();
    let store = MemoryStore::with_user(user.clone());
    store.set_failing(true).await;
    let mut session = Session::new(user.clone());
    let notifier = RecordingNotifier::default();

    let form = ProfileForm::for_user(&user);
    let outcome = form.submit(&store, &mut session, &notifier).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(session.user(), &user);
    assert_eq!(
        *notifier.errors.lock().unwrap(),
        ["Something went wrong!"]
    );
}
