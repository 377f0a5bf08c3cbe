// Copyright 2026 Skyguard Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operator roles and session state.
//!
//! Three fixed demo accounts map to the three operator roles. The
//! credential table is a plain equality lookup and is not a security
//! mechanism; it only selects which dashboard the console presents.

use thiserror::Error;

/// Operator role selected at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Runs proximity checks and dispatches alerts.
    CommandCenter,
    /// Receives alerts about approaching aircraft.
    GroundUnit,
    /// Receives alerts about the ground unit below.
    Aircraft,
}

impl Role {
    /// Human-readable role name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Role::CommandCenter => "Command Center",
            Role::GroundUnit => "Ground Unit",
            Role::Aircraft => "Aircraft",
        }
    }
}

/// Demo accounts, one per role.
const CREDENTIALS: [(Role, &str, &str); 3] = [
    (Role::CommandCenter, "command", "center123"),
    (Role::GroundUnit, "ground", "unit123"),
    (Role::Aircraft, "aircraft", "flight123"),
];

/// Look up the role for a username/password pair.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<Role> {
    CREDENTIALS
        .iter()
        .find(|(_, user, pass)| *user == username && *pass == password)
        .map(|(role, _, _)| *role)
}

/// Login failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The username/password pair matched no account.
    #[error("incorrect username or password")]
    InvalidCredentials,
}

/// A single operator session: who is logged in and whether an alert has
/// been sent during the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
    alert_sent: bool,
}

impl Session {
    /// A logged-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already logged in with the given role, bypassing the
    /// credential check.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self {
            role: Some(role),
            alert_sent: false,
        }
    }

    /// Authenticate and bind the matched role to this session.
    ///
    /// On failure the session is left unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Role, LoginError> {
        let role = authenticate(username, password).ok_or(LoginError::InvalidCredentials)?;
        self.role = Some(role);
        Ok(role)
    }

    /// Clear the logged-in role and any recorded alert.
    #[allow(dead_code)]
    pub fn logout(&mut self) {
        self.role = None;
        self.alert_sent = false;
    }

    /// The logged-in role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Record that an alert was dispatched during this session.
    pub fn mark_alert_sent(&mut self) {
        self.alert_sent = true;
    }

    /// Whether an alert has been dispatched during this session.
    #[must_use]
    pub fn alert_sent(&self) -> bool {
        self.alert_sent
    }
}
