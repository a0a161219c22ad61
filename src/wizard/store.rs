use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::session::WizardSession;

/// In-memory home of open wizard sessions. Each session is owned
/// exclusively; the mutex serialises access so no two requests can mutate
/// the same session at once. Nothing here is persisted: closing a session
/// discards its state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, WizardSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .lock()
            .expect("session store mutex poisoned")
            .insert(id, WizardSession::new());
        id
    }

    /// Run `f` against the named session, or `None` if it does not exist.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut WizardSession) -> T) -> Option<T> {
        let mut sessions = self.inner.lock().expect("session store mutex poisoned");
        sessions.get_mut(&id).map(f)
    }

    /// Close the wizard and discard its in-memory state.
    pub fn remove(&self, id: Uuid) -> bool {
        self.inner
            .lock()
            .expect("session store mutex poisoned")
            .remove(&id)
            .is_some()
    }
}
