//! Profile update form

use crate::notify::Notifier;
use crate::session::{Session, User};
use crate::store::{ProfileDraft, RemoteStore};
use tracing::{error, info};

/// Outcome of a profile submit
///
/// `Saved` means the caller should navigate back to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the draft and the session was refreshed
    Saved,

    /// The backend rejected the draft; the fields are left as typed
    Rejected,
}

/// Draft state of the profile form, seeded from the signed-in user
#[derive(Debug, Clone)]
pub struct ProfileForm {
    user_id: String,

    /// Display name field
    pub name: String,

    /// Email field
    pub email: String,

    /// New password field; empty means keep the current password
    pub password: String,
}

impl ProfileForm {
    /// Seed a form from the signed-in user, with an empty password
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
        }
    }

    fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Submit the draft to the store
    ///
    /// On success the session user is replaced wholesale with the
    /// server's copy. On rejection the fields stay as typed so the
    /// user can retry without re-entering them.
    pub async fn submit<S, N>(
        &self,
        store: &S,
        session: &mut Session,
        notifier: &N,
    ) -> SubmitOutcome
    where
        S: RemoteStore,
        N: Notifier,
    {
        match store.update_profile(&self.user_id, &self.draft()).await {
            Ok(user) => {
                info!("Profile updated for user {}", user.id);
                session.replace_user(user);
                notifier.success("Profile updated successfully!");
                SubmitOutcome::Saved
            }
            Err(crate::TaskViewError::Validation(message)) => {
                notifier.error(&message);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                error!("Update error: {}", e);
                notifier.error("Something went wrong!");
                SubmitOutcome::Rejected
            }
        }
    }
}
