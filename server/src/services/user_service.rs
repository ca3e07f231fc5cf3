// trolley_api/src/services/user_service.rs

use crate::db;
use crate::errors::{AppError, Result};
use crate::models::{Credentials, NewUser, User, UserDto};
use crate::services::auth_service;
use sqlx::PgPool;
use tracing::{event, info, instrument, warn, Level};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Field checks for a sign-up request.
pub fn validate_new_user(new_user: &NewUser) -> Result<()> {
  validate_email(&new_user.email)?;
  if new_user.password.chars().count() < MIN_PASSWORD_LEN {
    warn!("Password too short for signup ({} chars).", new_user.password.chars().count());
    return Err(AppError::Validation(format!(
      "Password must be at least {} characters long.",
      MIN_PASSWORD_LEN
    )));
  }
  if new_user.name.first.trim().is_empty() || new_user.name.last.trim().is_empty() {
    return Err(AppError::Validation("Both first and last name are required.".to_string()));
  }
  Ok(())
}

fn validate_email(email: &str) -> Result<()> {
  let well_formed = match email.split_once('@') {
    Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
    None => false,
  };
  if !well_formed {
    warn!("Invalid email format provided.");
    return Err(AppError::Validation("Valid email is required.".to_string()));
  }
  Ok(())
}

#[instrument(name = "user_service::create_user", skip(pool, new_user), fields(email = %new_user.email), err(Display))]
pub async fn create_user(pool: &PgPool, new_user: &NewUser) -> Result<UserDto> {
  validate_new_user(new_user)?;
  let password_hash = auth_service::hash_password(&new_user.password)?;
  let user = db::users::insert(pool, &new_user.email, &password_hash, &new_user.name).await?;
  info!("User created successfully: ID={}, Email={}", user.id, user.email);
  Ok(UserDto::from(&user))
}

/// Looks the user up by email and checks the password.
/// Unknown email and wrong password are indistinguishable to the caller.
#[instrument(name = "user_service::verify_credentials", skip(pool, credentials), fields(email = %credentials.email), err(Display))]
pub async fn verify_credentials(pool: &PgPool, credentials: &Credentials) -> Result<User> {
  validate_email(&credentials.email)?;
  let invalid = || AppError::Auth("Invalid email or password".to_string());

  let user = match db::users::find_by_email(pool, &credentials.email).await? {
    Some(user) => user,
    None => {
      event!(Level::DEBUG, "No user with this email.");
      return Err(invalid());
    }
  };

  if !auth_service::verify_password(&user.password_hash, &credentials.password)? {
    event!(Level::DEBUG, user_id = %user.id, "Password mismatch.");
    return Err(invalid());
  }
  Ok(user)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::UserName;

  fn new_user(email: &str, password: &str) -> NewUser {
    NewUser {
      email: email.to_string(),
      password: password.to_string(),
      name: UserName {
        first: "Grace".to_string(),
        last: "Hopper".to_string(),
      },
    }
  }

  #[test]
  fn accepts_a_well_formed_signup() {
    assert!(validate_new_user(&new_user("grace@example.com", "12345678")).is_ok());
  }

  #[test]
  fn rejects_bad_email_and_short_password() {
    for email in ["", "grace", "@example.com", "grace@", "a@b@c"] {
      assert!(matches!(validate_new_user(&new_user(email, "12345678")), Err(AppError::Validation(_))), "{}", email);
    }
    assert!(matches!(
      validate_new_user(&new_user("grace@example.com", "1234567")),
      Err(AppError::Validation(_))
    ));
  }
}
