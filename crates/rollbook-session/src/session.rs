//! The store access facade.
//!
//! A [`Session`] owns the current state snapshot and is the only write path:
//! `dispatch` runs the pure transition, persists the result, then publishes
//! it to observers. Every state change goes through [`Session::publish`],
//! including replacements that bypass `dispatch` (initial load
//! normalization, test fixtures), so storage always reflects the last
//! published snapshot.

use std::sync::{Mutex, OnceLock};

use rollbook_state::{Command, State, ValidationError};
use rollbook_store::BlobStore;

use crate::error::{SessionError, SessionResult};
use crate::persistence::Persistence;

type Observer = Box<dyn Fn(&State) + Send + Sync>;

/// The facade the presentation layer dispatches commands through.
pub struct Session<S: BlobStore> {
    state: State,
    persistence: Persistence<S>,
    observers: Vec<Observer>,
}

impl<S: BlobStore> Session<S> {
    /// Open a session against `store` under the default state key.
    ///
    /// Loads the persisted state (or the empty default) and immediately
    /// re-saves it, so load-time normalization of a partial blob is written
    /// back without waiting for the first command.
    pub fn open(store: S) -> Self {
        Self::from_persistence(Persistence::new(store))
    }

    /// Open a session with a custom storage key.
    pub fn open_with_key(store: S, key: impl Into<String>) -> Self {
        Self::from_persistence(Persistence::with_key(store, key))
    }

    fn from_persistence(persistence: Persistence<S>) -> Self {
        let state = persistence.load();
        persistence.save(&state);
        Self {
            state,
            persistence,
            observers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Apply a command, persist the result, and publish it.
    ///
    /// Commands that would violate a uniqueness rule are rejected here with
    /// the matching validation error; the state and storage stay untouched.
    /// Persistence failures do not reject the command — they are logged and
    /// the in-memory state moves forward regardless.
    pub fn dispatch(&mut self, command: Command) -> SessionResult<&State> {
        self.check_uniqueness(&command)?;
        let next = self.state.apply(&command);
        self.publish(next);
        Ok(&self.state)
    }

    /// Replace the state wholesale, persisting and publishing it.
    pub fn set_state(&mut self, state: State) {
        self.publish(state);
    }

    /// Register a callback invoked with every published snapshot.
    pub fn observe(&mut self, observer: impl Fn(&State) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The persistence adapter this session writes through.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn publish(&mut self, next: State) {
        self.persistence.save(&next);
        self.state = next;
        for observer in &self.observers {
            observer(&self.state);
        }
    }

    /// Dispatch-time re-check of the duplicate contract.
    ///
    /// The pure transition trusts its caller; this guard means a caller that
    /// skipped the query helpers gets a rejection instead of duplicate rows.
    fn check_uniqueness(&self, command: &Command) -> SessionResult<()> {
        let violation = match command {
            Command::AddCourseType { name } => self
                .state
                .is_duplicate_course_type(name, None)
                .then_some(ValidationError::DuplicateCourseType),
            Command::UpdateCourseType { id, name } => self
                .state
                .is_duplicate_course_type(name, Some(*id))
                .then_some(ValidationError::DuplicateCourseType),
            Command::AddCourse { name } => self
                .state
                .is_duplicate_course(name, None)
                .then_some(ValidationError::DuplicateCourse),
            Command::UpdateCourse { id, name } => self
                .state
                .is_duplicate_course(name, Some(*id))
                .then_some(ValidationError::DuplicateCourse),
            Command::AddOffering {
                course_type_id,
                course_id,
            } => self
                .state
                .is_duplicate_offering(*course_type_id, *course_id, None)
                .then_some(ValidationError::DuplicateOffering),
            Command::UpdateOffering {
                id,
                course_type_id,
                course_id,
            } => self
                .state
                .is_duplicate_offering(*course_type_id, *course_id, Some(*id))
                .then_some(ValidationError::DuplicateOffering),
            _ => None,
        };
        match violation {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl<S: BlobStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("course_types", &self.state.course_types.len())
            .field("courses", &self.state.courses.len())
            .field("offerings", &self.state.offerings.len())
            .field("registrations", &self.state.registrations.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A session over a boxed store, as held by the process-wide slot.
pub type SharedSession = Session<Box<dyn BlobStore>>;

static GLOBAL: OnceLock<Mutex<SharedSession>> = OnceLock::new();

/// Install the process-wide session. May only be called once.
pub fn init_global(session: SharedSession) -> SessionResult<()> {
    GLOBAL
        .set(Mutex::new(session))
        .map_err(|_| SessionError::AlreadyInitialized)
}

/// The process-wide session.
///
/// Fails fast with [`SessionError::NotInitialized`] when called before
/// [`init_global`] — that ordering is a bug in the host application, not a
/// recoverable condition.
pub fn global() -> SessionResult<&'static Mutex<SharedSession>> {
    GLOBAL.get().ok_or(SessionError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use rollbook_store::{FileBlobStore, MemoryBlobStore};
    use rollbook_types::{CourseId, CourseTypeId, OfferingId};

    fn add_ct(name: &str) -> Command {
        Command::AddCourseType { name: name.into() }
    }

    fn add_course(name: &str) -> Command {
        Command::AddCourse { name: name.into() }
    }

    fn add_offering(ct: u64, c: u64) -> Command {
        Command::AddOffering {
            course_type_id: CourseTypeId::new(ct),
            course_id: CourseId::new(c),
        }
    }

    // ---- Dispatch and persistence ----

    #[test]
    fn open_on_empty_store_starts_default() {
        let session = Session::open(MemoryBlobStore::new());
        assert_eq!(session.state(), &State::default());
    }

    #[test]
    fn open_resaves_loaded_state() {
        // Even with no commands dispatched, opening writes the (normalized)
        // state back under the key.
        let session = Session::open(MemoryBlobStore::new());
        assert!(session
            .persistence()
            .store()
            .exists(crate::STATE_KEY)
            .unwrap());
    }

    #[test]
    fn dispatch_applies_and_returns_new_state() {
        let mut session = Session::open(MemoryBlobStore::new());
        let state = session.dispatch(add_ct("Individual")).unwrap();
        assert_eq!(state.course_types.len(), 1);
        assert_eq!(state.course_types[0].name, "Individual");
    }

    #[test]
    fn dispatch_persists_before_returning() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        let bytes = session
            .persistence()
            .store()
            .read(crate::STATE_KEY)
            .unwrap()
            .unwrap();
        let stored: State = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(&stored, session.state());
    }

    #[test]
    fn session_survives_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        {
            let mut session = Session::open(FileBlobStore::open(dir.path()).unwrap());
            session.dispatch(add_ct("Individual")).unwrap();
            session.dispatch(add_course("English")).unwrap();
            session.dispatch(add_offering(1, 1)).unwrap();
        }
        let session = Session::open(FileBlobStore::open(dir.path()).unwrap());
        assert_eq!(session.state().course_types.len(), 1);
        assert_eq!(session.state().offerings.len(), 1);
        assert_eq!(session.state().next_ids.offering, 2);
    }

    // ---- Duplicate hardening ----

    #[test]
    fn duplicate_add_is_rejected_and_state_unchanged() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        let before = session.state().clone();

        let err = session.dispatch(add_ct("  individual ")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(ValidationError::DuplicateCourseType)
        ));
        assert_eq!(session.state(), &before);

        // Storage still holds the pre-rejection snapshot.
        let bytes = session
            .persistence()
            .store()
            .read(crate::STATE_KEY)
            .unwrap()
            .unwrap();
        let stored: State = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(stored, before);
    }

    #[test]
    fn update_back_to_own_name_is_allowed() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        session
            .dispatch(Command::UpdateCourseType {
                id: CourseTypeId::new(1),
                name: "Individual".into(),
            })
            .unwrap();
        assert_eq!(session.state().course_types[0].name, "Individual");
    }

    #[test]
    fn duplicate_offering_pair_is_rejected() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        session.dispatch(add_course("English")).unwrap();
        session.dispatch(add_offering(1, 1)).unwrap();

        let err = session.dispatch(add_offering(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(ValidationError::DuplicateOffering)
        ));
        assert_eq!(session.state().offerings.len(), 1);
    }

    #[test]
    fn update_offering_to_existing_pair_is_rejected() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        session.dispatch(add_ct("Group")).unwrap();
        session.dispatch(add_course("English")).unwrap();
        session.dispatch(add_offering(1, 1)).unwrap();
        session.dispatch(add_offering(2, 1)).unwrap();

        let err = session
            .dispatch(Command::UpdateOffering {
                id: OfferingId::new(2),
                course_type_id: CourseTypeId::new(1),
                course_id: CourseId::new(1),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Rejected(ValidationError::DuplicateOffering)
        ));
    }

    // ---- Observers ----

    #[test]
    fn observers_see_every_published_state() {
        let seen = Arc::new(AtomicUsize::new(0));
        let mut session = Session::open(MemoryBlobStore::new());
        let counter = Arc::clone(&seen);
        session.observe(move |_state| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.dispatch(add_ct("Individual")).unwrap();
        session.dispatch(add_course("English")).unwrap();
        session.set_state(State::default());
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn rejected_dispatch_does_not_notify() {
        let seen = Arc::new(AtomicUsize::new(0));
        let mut session = Session::open(MemoryBlobStore::new());
        let counter = Arc::clone(&seen);
        session.observe(move |_state| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.dispatch(add_ct("Individual")).unwrap();
        let _ = session.dispatch(add_ct("Individual"));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    // ---- set_state ----

    #[test]
    fn set_state_replaces_and_persists() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();

        session.set_state(State::default());
        assert_eq!(session.state(), &State::default());
        let bytes = session
            .persistence()
            .store()
            .read(crate::STATE_KEY)
            .unwrap()
            .unwrap();
        let stored: State = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(stored, State::default());
    }

    // ---- Full walkthrough ----

    #[test]
    fn registration_walkthrough() {
        let mut session = Session::open(MemoryBlobStore::new());
        session.dispatch(add_ct("Individual")).unwrap();
        session.dispatch(add_ct("Group")).unwrap();

        let err = session.dispatch(add_ct("  individual ")).unwrap_err();
        assert!(matches!(err, SessionError::Rejected(_)));

        session.dispatch(add_course("English")).unwrap();
        session.dispatch(add_offering(1, 1)).unwrap();
        assert_eq!(
            session.state().offering_label(&session.state().offerings[0]),
            "Individual - English"
        );

        session
            .dispatch(Command::AddRegistration {
                offering_id: OfferingId::new(1),
                student_name: "Asha".into(),
                email: "asha@example.com".into(),
                phone: None,
            })
            .unwrap();
        assert_eq!(session.state().registrations[0].id.get(), 1);

        session
            .dispatch(Command::DeleteCourseType {
                id: CourseTypeId::new(1),
            })
            .unwrap();
        assert!(session.state().offerings.is_empty());
        assert!(session.state().registrations.is_empty());
        assert_eq!(session.state().courses.len(), 1);
        assert_eq!(session.state().course_name(CourseId::new(1)), "English");
    }

    // ---- Global slot ----

    #[test]
    fn global_slot_round_trip() {
        // OnceLock is process-wide, so the uninitialized and initialized
        // behaviors are exercised in one test, in order.
        assert!(matches!(global(), Err(SessionError::NotInitialized)));

        let session: SharedSession = Session::open(Box::new(MemoryBlobStore::new()));
        init_global(session).unwrap();

        let shared = global().unwrap();
        let mut guard = shared.lock().unwrap();
        guard.dispatch(add_ct("Individual")).unwrap();
        assert_eq!(guard.state().course_types.len(), 1);
        drop(guard);

        let another: SharedSession = Session::open(Box::new(MemoryBlobStore::new()));
        assert!(matches!(
            init_global(another),
            Err(SessionError::AlreadyInitialized)
        ));
    }
}
