use std::cell::{Cell, RefCell};

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;
use iron_capital_web::application::{AuthService, DirectoryService, NotesService};
use iron_capital_web::domain::{
    auth::{AuthSession, AuthUser, Credentials, SignUpOutcome},
    errors::{
        AppError, ApplicationError, BackendError, DomainError, InfraResult, InfrastructureError, ValidationError,
    },
    notes::{Note, NoteDraft},
    repositories::{AuthGateway, CompanyDirectory, NotesRepository, SessionStore},
    screener::{CompanyListing, FilterCriteria, ListingField, SortKey, SortState},
};

fn session(expires_at: Option<u64>) -> AuthSession {
    AuthSession {
        access_token: "jwt".to_string(),
        refresh_token: None,
        expires_at,
        user: AuthUser { id: "user-1".to_string(), email: Some("investor@iron.capital".to_string()) },
    }
}

#[derive(Default)]
struct MemorySessions {
    stored: RefCell<Option<AuthSession>>,
}

impl SessionStore for MemorySessions {
    fn load(&self) -> InfraResult<Option<AuthSession>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, session: &AuthSession) -> InfraResult<()> {
        *self.stored.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> InfraResult<()> {
        self.stored.borrow_mut().take();
        Ok(())
    }
}

/// Accepts one password; sign-up needs email confirmation
struct FakeGateway {
    password: &'static str,
    sign_out_fails: bool,
}

impl FakeGateway {
    fn new(password: &'static str) -> Self {
        Self { password, sign_out_fails: false }
    }
}

impl AuthGateway for FakeGateway {
    fn sign_in<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<AuthSession>> {
        async move {
            if credentials.password() == self.password {
                Ok(session(Some(2_000_000_000)))
            } else {
                Err(BackendError::new(400, "Invalid login credentials")
                    .with_code("invalid_credentials")
                    .into())
            }
        }
        .boxed_local()
    }

    fn sign_up<'a>(&'a self, _credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<SignUpOutcome>> {
        async move {
            Ok(SignUpOutcome::ConfirmationRequired)
        }
        .boxed_local()
    }

    fn sign_out<'a>(&'a self, _session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            if self.sign_out_fails {
                Err(BackendError::new(500, "boom").into())
            } else {
                Ok(())
            }
        }
        .boxed_local()
    }
}

#[test]
fn sign_in_saves_session_and_sign_out_clears_it() {
    let auth = AuthService::new(FakeGateway::new("hunter22"), MemorySessions::default());

    let signed_in = block_on(auth.sign_in("investor@iron.capital", "hunter22")).unwrap();
    assert_eq!(signed_in.email(), "investor@iron.capital");
    assert_eq!(auth.restore_session(1_700_000_000).unwrap(), Some(signed_in.clone()));

    block_on(auth.sign_out(&signed_in)).unwrap();
    assert_eq!(auth.restore_session(1_700_000_000).unwrap(), None);
}

#[test]
fn invalid_credentials_surface_backend_message() {
    let auth = AuthService::new(FakeGateway::new("hunter22"), MemorySessions::default());
    let err = block_on(auth.sign_in("investor@iron.capital", "wrong-password")).unwrap_err();
    match &err {
        AppError::Infrastructure(InfrastructureError::Backend(backend)) => {
            assert_eq!(backend.status, 400);
            assert_eq!(backend.code.as_deref(), Some("invalid_credentials"));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("Invalid login credentials"));
    assert_eq!(auth.restore_session(0).unwrap(), None);
}

#[test]
fn malformed_credentials_never_reach_the_gateway() {
    let auth = AuthService::new(FakeGateway::new("hunter22"), MemorySessions::default());

    let err = block_on(auth.sign_in("not-an-email", "hunter22")).unwrap_err();
    assert!(matches!(err, AppError::Domain(DomainError::Validation(ValidationError::InvalidEmail(_)))));

    let err = block_on(auth.sign_up("new@iron.capital", "123")).unwrap_err();
    assert_eq!(
        err,
        AppError::Domain(DomainError::Validation(ValidationError::PasswordTooShort { min_len: 6 }))
    );
}

#[test]
fn sign_up_with_confirmation_keeps_user_signed_out() {
    let auth = AuthService::new(FakeGateway::new("hunter22"), MemorySessions::default());
    let outcome = block_on(auth.sign_up("new@iron.capital", "hunter22")).unwrap();
    assert_eq!(outcome, SignUpOutcome::ConfirmationRequired);
    assert_eq!(auth.restore_session(0).unwrap(), None);
}

#[test]
fn expired_session_is_dropped_on_restore() {
    let sessions = MemorySessions::default();
    sessions.save(&session(Some(100))).unwrap();
    let auth = AuthService::new(FakeGateway::new("x"), sessions);
    assert_eq!(auth.restore_session(99).unwrap().map(|s| s.expires_at), Some(Some(100)));
    assert_eq!(auth.restore_session(100).unwrap(), None);
    assert_eq!(auth.restore_session(0).unwrap(), None);
}

#[test]
fn failed_remote_sign_out_still_clears_local_session() {
    let mut gateway = FakeGateway::new("hunter22");
    gateway.sign_out_fails = true;
    let auth = AuthService::new(gateway, MemorySessions::default());
    let signed_in = block_on(auth.sign_in("investor@iron.capital", "hunter22")).unwrap();

    assert!(block_on(auth.sign_out(&signed_in)).is_err());
    assert_eq!(auth.restore_session(0).unwrap(), None);
}

/// Newest-first note table for one user
#[derive(Default)]
struct MemoryNotes {
    rows: RefCell<Vec<Note>>,
    next_id: Cell<u32>,
}

impl NotesRepository for MemoryNotes {
    fn list_notes<'a>(&'a self, session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<Vec<Note>>> {
        async move {
            Ok(self
                .rows
                .borrow()
                .iter()
                .filter(|note| note.user_id == session.user.id)
                .cloned()
                .collect())
        }
        .boxed_local()
    }

    fn insert_note<'a>(&'a self, session: &'a AuthSession, draft: &'a NoteDraft) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.rows.borrow_mut().insert(
                0,
                Note {
                    id: format!("note-{}", id),
                    user_id: session.user.id.clone(),
                    title: draft.title().to_string(),
                    content: draft.content().to_string(),
                    created_at: format!("2024-01-0{}T00:00:00Z", id),
                },
            );
            Ok(())
        }
        .boxed_local()
    }

    fn delete_note<'a>(&'a self, _session: &'a AuthSession, note_id: &'a str) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            self.rows.borrow_mut().retain(|note| note.id != note_id);
            Ok(())
        }
        .boxed_local()
    }
}

#[test]
fn notes_add_and_delete_return_fresh_list() {
    let notes = NotesService::new(MemoryNotes::default());
    let current = session(None);

    let list = block_on(notes.add(Some(&current), "  Q3 thesis ", "Buy the dip")).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Q3 thesis");

    let list = block_on(notes.add(Some(&current), "Risks", "")).unwrap();
    let titles: Vec<&str> = list.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, ["Risks", "Q3 thesis"]);

    let list = block_on(notes.delete(Some(&current), "note-1")).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Risks");
}

#[test]
fn notes_require_session_and_title() {
    let notes = NotesService::new(MemoryNotes::default());
    assert_eq!(
        block_on(notes.list(None)).unwrap_err(),
        AppError::Application(ApplicationError::NotAuthenticated)
    );

    let current = session(None);
    assert_eq!(
        block_on(notes.add(Some(&current), "   ", "body")).unwrap_err(),
        AppError::Domain(DomainError::Validation(ValidationError::EmptyNoteTitle))
    );
    assert_eq!(
        block_on(notes.delete(Some(&current), " ")).unwrap_err(),
        AppError::Domain(DomainError::Validation(ValidationError::EmptyNoteId))
    );
    assert!(block_on(notes.list(Some(&current))).unwrap().is_empty());
}

struct FixedDirectory(Vec<CompanyListing>);

impl CompanyDirectory for FixedDirectory {
    fn list_companies<'a>(&'a self, _session: Option<&'a AuthSession>) -> LocalBoxFuture<'a, InfraResult<Vec<CompanyListing>>> {
        async move { Ok(self.0.clone()) }.boxed_local()
    }
}

fn listing(id: &str, symbol: &str, sector: Option<&str>, market_cap: Option<f64>) -> CompanyListing {
    CompanyListing {
        id: id.to_string(),
        name: format!("{} Corp", symbol),
        symbol: symbol.to_string(),
        sector: sector.map(str::to_string),
        price: None,
        market_cap,
        change_percent: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[test]
fn directory_rows_are_queryable() {
    let directory = DirectoryService::new(FixedDirectory(vec![
        listing("1", "BIG", Some("Energy"), Some(9e11)),
        listing("2", "MID", Some("Utilities"), Some(5e10)),
        listing("3", "NEW", None, None),
        listing("4", "SML", Some("Energy"), Some(1e9)),
    ]));
    let store = block_on(directory.load(None)).unwrap();
    assert_eq!(store.categories(), ["Energy", "Utilities"]);

    let energy = FilterCriteria::new().with_category("Energy");
    let ascending = SortState::by(SortKey::ascending(ListingField::MarketCap));
    let symbols: Vec<&str> = store.query(&energy, &ascending).iter().map(|row| row.symbol.as_str()).collect();
    assert_eq!(symbols, ["SML", "BIG"]);

    let bounded = FilterCriteria::new().with_range(ListingField::MarketCap, "1e10", "");
    let symbols: Vec<&str> = store
        .query(&bounded, &SortState::unsorted())
        .iter()
        .map(|row| row.symbol.as_str())
        .collect();
    assert_eq!(symbols, ["BIG", "MID"]);
}
