use crate::middleware::jwt::AuthUser;
use axum::{
    Extension, body::Body, http::Request, middleware::Next, response::IntoResponse,
};
use shared::errors::HttpError;

fn ensure_any(user: &AuthUser, allowed: &[&str]) -> Result<(), HttpError> {
    if user.roles.iter().any(|r| allowed.contains(&r.as_str())) {
        Ok(())
    } else {
        Err(HttpError::Forbidden("Access denied".to_string()))
    }
}

pub async fn admin_only(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    ensure_any(&user, &["ADMIN"])?;
    Ok(next.run(req).await)
}

pub async fn cashier_only(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    ensure_any(&user, &["CASHIER"])?;
    Ok(next.run(req).await)
}

// Shift self-service is open to floor staff, not admins.
pub async fn staff_only(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    ensure_any(&user, &["CASHIER", "WAITER"])?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> AuthUser {
        AuthUser {
            id: 1,
            username: "kim".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn admin_passes_admin_gate() {
        assert!(ensure_any(&user(&["ADMIN"]), &["ADMIN"]).is_ok());
    }

    #[test]
    fn waiter_fails_admin_gate_but_passes_staff_gate() {
        let waiter = user(&["WAITER"]);
        assert!(ensure_any(&waiter, &["ADMIN"]).is_err());
        assert!(ensure_any(&waiter, &["CASHIER", "WAITER"]).is_ok());
    }

    #[test]
    fn no_roles_fails_every_gate() {
        let anon = user(&[]);
        assert!(ensure_any(&anon, &["ADMIN"]).is_err());
        assert!(ensure_any(&anon, &["CASHIER", "WAITER"]).is_err());
    }
}
