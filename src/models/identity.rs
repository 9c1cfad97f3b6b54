use serde::{Deserialize, Serialize};

/// The `Identity` struct is the locally cached snapshot of the
/// authenticated principal, as returned by the login/profile endpoints.
///
/// `id` may be empty right after registration; a later profile fetch
/// fills it in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Identity {
            id: id.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// The identity recorded at login time, before any profile fetch.
    pub fn placeholder(username: impl Into<String>, email: impl Into<String>) -> Self {
        Identity::new("", username, email)
    }
}

/// The aggregate authentication state of this client.
///
/// Invariant: `authenticated` is true exactly when `credential` is present.
/// The session store's own operations are the only place this is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub credential: Option<String>,
    pub identity: Option<Identity>,
    pub authenticated: bool,
}

impl Session {
    /// The unauthenticated session every process starts from.
    pub fn empty() -> Self {
        Session {
            credential: None,
            identity: None,
            authenticated: false,
        }
    }

    pub fn authenticated(credential: impl Into<String>, identity: Identity) -> Self {
        Session {
            credential: Some(credential.into()),
            identity: Some(identity),
            authenticated: true,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::empty()
    }
}

/// The one durable record: `{token, user, isAuthenticated}`.
///
/// Field names are part of the storage format and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<Identity>,
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
}

impl PersistedSession {
    /// Rebuild a `Session` from the durable record. A record whose flag
    /// disagrees with the presence of the token is treated as corrupt and
    /// yields the empty session rather than a half-authenticated one.
    pub fn into_session(self) -> Session {
        match (self.token, self.is_authenticated) {
            (Some(token), true) => Session {
                credential: Some(token),
                identity: self.user,
                authenticated: true,
            },
            _ => Session::empty(),
        }
    }
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        PersistedSession {
            token: session.credential.clone(),
            user: session.identity.clone(),
            is_authenticated: session.authenticated,
        }
    }
}

// Simple tests for the session/record conversions.
#[test]
fn test_persisted_round_trip() {
    let session = Session::authenticated("tok123", Identity::new("1", "alice", "a@x.com"));
    let record = PersistedSession::from(&session);
    assert_eq!(record.token.as_deref(), Some("tok123"));
    assert!(record.is_authenticated);
    assert_eq!(record.into_session(), session);
}

#[test]
fn test_inconsistent_record_restores_empty() {
    let record = PersistedSession {
        token: None,
        user: Some(Identity::placeholder("alice", "")),
        is_authenticated: true,
    };
    assert_eq!(record.into_session(), Session::empty());

    let record = PersistedSession {
        token: Some("tok".to_string()),
        user: None,
        is_authenticated: false,
    };
    assert_eq!(record.into_session(), Session::empty());
}

#[test]
fn test_record_serializes_with_storage_field_names() {
    let record = PersistedSession::from(&Session::authenticated(
        "tok",
        Identity::new("1", "alice", "a@x.com"),
    ));
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("isAuthenticated").is_some());
    assert!(json.get("token").is_some());
    assert!(json.get("user").is_some());
}
