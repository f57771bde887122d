//! Session and view state: which role is active, which view is shown and
//! which candidate is open. Transitions are a pure reducer; the client holds
//! the state and the server only applies actions to it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;

pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    HrManager,
    Candidate,
}

impl Role {
    pub fn is_management(self) -> bool {
        matches!(self, Role::Admin | Role::HrManager)
    }

    /// View a role lands on after login.
    pub fn home(self) -> View {
        match self {
            Role::Admin => View::AdminPanel,
            Role::HrManager => View::Dashboard,
            Role::Candidate => View::CandidatePortal,
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "HR_MANAGER" => Ok(Role::HrManager),
            "CANDIDATE" => Ok(Role::Candidate),
            other => Err(SessionError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    Landing,
    Dashboard,
    Scanner,
    Candidates,
    Jobs,
    CandidatePortal,
    AdminPanel,
}

/// Where a login was initiated. Admin access only exists behind the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginEntry {
    #[default]
    Landing,
    AdminConsole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub role: Option<Role>,
    pub view: View,
    pub selected_candidate: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            role: None,
            view: View::Landing,
            selected_candidate: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Login {
        role: Role,
        #[serde(default)]
        entry: LoginEntry,
    },
    Logout,
    Navigate {
        view: View,
    },
    #[serde(rename_all = "camelCase")]
    SelectCandidate {
        candidate_id: String,
    },
    CloseCandidate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("admin access requires the admin console")]
    AdminEntryRequired,

    #[error("no active session")]
    NotLoggedIn,

    #[error("candidate profiles are restricted to HR and admin roles")]
    NotManagement,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownRole(_) => AppError::Validation(err.to_string()),
            SessionError::NotLoggedIn => AppError::Unauthorized,
            SessionError::AdminEntryRequired | SessionError::NotManagement => AppError::Forbidden,
        }
    }
}

/// Applies one action. Rejected actions leave the caller's state untouched.
pub fn reduce(state: &SessionState, action: Action) -> Result<SessionState, SessionError> {
    match action {
        Action::Login { role, entry } => {
            if role == Role::Admin && entry != LoginEntry::AdminConsole {
                return Err(SessionError::AdminEntryRequired);
            }
            Ok(SessionState {
                role: Some(role),
                view: role.home(),
                selected_candidate: None,
            })
        }
        Action::Logout => Ok(SessionState::default()),
        Action::Navigate { view } => {
            state.role.ok_or(SessionError::NotLoggedIn)?;
            Ok(SessionState {
                role: state.role,
                view,
                selected_candidate: None,
            })
        }
        Action::SelectCandidate { candidate_id } => {
            let role = state.role.ok_or(SessionError::NotLoggedIn)?;
            if !role.is_management() {
                return Err(SessionError::NotManagement);
            }
            Ok(SessionState {
                selected_candidate: Some(candidate_id),
                ..state.clone()
            })
        }
        Action::CloseCandidate => {
            state.role.ok_or(SessionError::NotLoggedIn)?;
            Ok(SessionState {
                role: state.role,
                view: View::Candidates,
                selected_candidate: None,
            })
        }
    }
}

/// What a client should render for a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    Landing,
    #[serde(rename_all = "camelCase")]
    CandidateDetail {
        candidate_id: String,
    },
    View {
        view: View,
    },
}

/// Resolves the screen, redirecting views the role may not see.
pub fn resolve_screen(state: &SessionState) -> Screen {
    let Some(role) = state.role else {
        return Screen::Landing;
    };
    let management = role.is_management();

    if let (Some(id), true) = (&state.selected_candidate, management) {
        return Screen::CandidateDetail {
            candidate_id: id.clone(),
        };
    }

    let view = match state.view {
        View::Landing => role.home(),
        View::Dashboard if !management => View::CandidatePortal,
        View::Scanner | View::Candidates if !management => role.home(),
        View::AdminPanel if role != Role::Admin => {
            if management {
                View::Dashboard
            } else {
                role.home()
            }
        }
        other => other,
    };
    Screen::View { view }
}
