//! Authentication and security stubs.
//!
//! None of this is real security. Login always succeeds with a demo
//! token, the 2FA secret is a fixed string, and the verification code is
//! hard-coded. The endpoints exist so the demo UI has something to talk
//! to.

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The only 2FA code the stub accepts.
const DEMO_2FA_CODE: &str = "000000";

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// User email; echoed back, never checked.
    pub email: String,
    /// Password; ignored entirely.
    #[allow(dead_code)]
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Fixed demo token, not a real JWT.
    pub token: &'static str,
    /// Echoed demo user profile.
    pub user: Value,
}

/// `POST /api/auth/login` - always-succeeds login stub.
pub async fn login(Json(payload): Json<LoginRequest>) -> Json<LoginResponse> {
    Json(LoginResponse {
        token: "demo.jwt.token",
        user: json!({
            "email": payload.email,
            "name": "Demo User",
            "role": "admin",
        }),
    })
}

/// 2FA setup response.
#[derive(Debug, Serialize)]
pub struct TwoFaSetupResponse {
    /// Fixed demo secret; not a real TOTP seed.
    pub secret: &'static str,
    /// Placeholder QR code as inline SVG.
    pub qr_svg: &'static str,
}

/// `GET /api/security/2fa/setup` - fake 2FA enrollment.
pub async fn twofa_setup() -> Json<TwoFaSetupResponse> {
    Json(TwoFaSetupResponse {
        secret: "JBSWY3DPEHPK3PXP",
        qr_svg: "<svg width='120' height='120'><rect width='120' height='120' fill='#0EA5E9'/></svg>",
    })
}

/// 2FA verification request.
#[derive(Debug, Deserialize)]
pub struct TwoFaVerifyRequest {
    /// The submitted code.
    pub code: String,
}

/// 2FA verification response.
#[derive(Debug, Serialize)]
pub struct TwoFaVerifyResponse {
    /// Whether the code matched the demo code.
    pub verified: bool,
}

/// `POST /api/security/2fa/verify` - check against the demo code.
pub async fn twofa_verify(Json(payload): Json<TwoFaVerifyRequest>) -> Json<TwoFaVerifyResponse> {
    Json(TwoFaVerifyResponse {
        verified: payload.code == DEMO_2FA_CODE,
    })
}

/// RBAC query parameters.
#[derive(Debug, Deserialize)]
pub struct RbacQuery {
    /// Role to look up; defaults to `member`.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_string()
}

/// RBAC response.
#[derive(Debug, Serialize)]
pub struct RbacResponse {
    /// The role that was looked up.
    pub role: String,
    /// Permissions for that role; empty for unknown roles.
    pub permissions: Vec<&'static str>,
}

/// `GET /api/security/rbac` - static role-to-permission table.
pub async fn rbac(Query(query): Query<RbacQuery>) -> Json<RbacResponse> {
    let permissions = match query.role.as_str() {
        "admin" => vec!["manage_users", "manage_books", "view_reports", "billing"],
        "librarian" => vec!["manage_books", "transactions"],
        "member" => vec!["borrow", "read"],
        _ => Vec::new(),
    };
    Json(RbacResponse {
        role: query.role,
        permissions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;

    #[tokio::test]
    async fn login_always_succeeds() {
        let response = login(Json(LoginRequest {
            email: "reader@example.com".into(),
            password: "anything".into(),
        }))
        .await;

        assert_eq!(response.0.token, "demo.jwt.token");
        assert_eq!(response.0.user["email"], "reader@example.com");
        assert_eq!(response.0.user["role"], "admin");
    }

    #[tokio::test]
    async fn twofa_accepts_demo_code_only() {
        let ok = twofa_verify(Json(TwoFaVerifyRequest {
            code: "000000".into(),
        }))
        .await;
        assert!(ok.0.verified);

        let bad = twofa_verify(Json(TwoFaVerifyRequest {
            code: "123456".into(),
        }))
        .await;
        assert!(!bad.0.verified);
    }

    #[tokio::test]
    async fn rbac_known_roles() {
        let response = rbac(Query(RbacQuery {
            role: "librarian".into(),
        }))
        .await;
        assert_eq!(response.0.permissions, vec!["manage_books", "transactions"]);
    }

    #[tokio::test]
    async fn rbac_unknown_role_has_no_permissions() {
        let response = rbac(Query(RbacQuery {
            role: "superuser".into(),
        }))
        .await;
        assert!(response.0.permissions.is_empty());
    }
}
