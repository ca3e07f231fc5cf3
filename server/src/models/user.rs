// trolley_api/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
  pub first: String,
  pub last: String,
}

impl fmt::Display for UserName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.first, self.last)
  }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
  pub id: Uuid,
  pub email: String,
  pub password_hash: String,
  pub first_name: String,
  pub last_name: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl User {
  pub fn name(&self) -> UserName {
    UserName {
      first: self.first_name.clone(),
      last: self.last_name.clone(),
    }
  }
}

/// What clients get to see of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
  pub id: Uuid,
  pub name: UserName,
  pub email: String,
}

impl From<&User> for UserDto {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      name: user.name(),
      email: user.email.clone(),
    }
  }
}

// Request body for POST /signup
#[derive(Deserialize)]
pub struct NewUser {
  pub email: String,
  pub password: String,
  pub name: UserName,
}

// Request body for POST /users/login
#[derive(Deserialize)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

// Passwords stay out of Debug output and therefore out of traces.
impl fmt::Debug for NewUser {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NewUser").field("email", &self.email).field("name", &self.name).finish_non_exhaustive()
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
  }
}
