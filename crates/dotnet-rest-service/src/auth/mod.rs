//! # Authentication & Authorization
//!
//! Bearer tokens are HS256 JWTs carrying a subject and a list of roles. [`JwtAuth`] issues
//! and validates them and provides the axum middleware that rejects unauthenticated
//! requests. Per-operation access is decided by [`authorize`] using this matrix:
//!
//! | Operation | admin | write | read |
//! |-----------|:-----:|:-----:|:----:|
//! | Create    |   ✓   |   ✓   |      |
//! | List      |   ✓   |   ✓   |  ✓   |
//! | Get       |   ✓   |   ✓   |  ✓   |
//! | Update    |   ✓   |   ✓   |      |
//! | Delete    |   ✓   |       |      |

pub mod jwt;

pub use jwt::JwtAuth;

use crate::dotnet_rest_actor::DotnetRestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Write,
    Read,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Write => "write",
            Role::Read => "read",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "write" => Ok(Role::Write),
            "read" => Ok(Role::Read),
            other => Err(format!("unknown role '{other}' (expected admin, write or read)")),
        }
    }
}

/// The service operations subject to role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Operation::Create | Operation::Update => &[Role::Admin, Role::Write],
            Operation::List | Operation::Get => &[Role::Admin, Role::Write, Role::Read],
            Operation::Delete => &[Role::Admin],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Create => "CreateDotnetRest",
            Operation::List => "GetDotnetRests",
            Operation::Get => "GetDotnetRest",
            Operation::Update => "UpdateDotnetRest",
            Operation::Delete => "DeleteDotnetRest",
        }
    }
}

/// JWT claims. Unknown role strings are kept but grant nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles
            .iter()
            .any(|r| r.parse::<Role>().is_ok_and(|parsed| parsed == role))
    }
}

/// `Ok` when the claims carry at least one role allowed for `operation`.
pub fn authorize(claims: &Claims, operation: Operation) -> Result<(), DotnetRestError> {
    if operation
        .allowed_roles()
        .iter()
        .any(|role| claims.has_role(*role))
    {
        Ok(())
    } else {
        Err(DotnetRestError::Forbidden(format!(
            "{} requires one of the roles: {}",
            operation.name(),
            operation
                .allowed_roles()
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(roles: &[&str]) -> Claims {
        Claims {
            sub: "tester".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
            iat: 0,
            iss: None,
            aud: None,
        }
    }

    #[test]
    fn test_role_matrix() {
        use Operation::*;
        let cases = [
            ("admin", [Create, List, Get, Update, Delete].as_slice(), [].as_slice()),
            ("write", &[Create, List, Get, Update], &[Delete]),
            ("read", &[List, Get], &[Create, Update, Delete]),
        ];

        for (role, allowed, denied) in cases {
            let c = claims(&[role]);
            for op in allowed {
                assert!(authorize(&c, *op).is_ok(), "{role} should {op:?}");
            }
            for op in denied {
                assert!(
                    matches!(authorize(&c, *op), Err(DotnetRestError::Forbidden(_))),
                    "{role} should not {op:?}"
                );
            }
        }
    }

    #[test]
    fn test_no_roles_is_forbidden_everywhere() {
        let c = claims(&[]);
        assert!(authorize(&c, Operation::Get).is_err());

        let c = claims(&["superuser"]);
        assert!(authorize(&c, Operation::List).is_err());
    }

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!(claims(&["Write"]).has_role(Role::Write));
        assert!("root".parse::<Role>().is_err());
    }
}
