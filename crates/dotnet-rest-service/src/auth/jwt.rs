//! JWT issuing, validation and the authentication middleware.

use super::{authorize, Claims, Operation, Role};
use crate::config::JwtConfig;
use crate::dotnet_rest_actor::DotnetRestError;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::debug;

/// Issues and validates HS256 tokens signed with the configured secret.
#[derive(Clone)]
pub struct JwtAuth {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Validation,
    issuer: Option<String>,
    audience: Option<String>,
    token_ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret)),
            decoding_key: Arc::new(DecodingKey::from_secret(secret)),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            token_ttl_secs: i64::try_from(config.token_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Signs a token for `subject` holding `roles`, valid for the configured lifetime.
    pub fn issue_token(&self, subject: &str, roles: &[Role]) -> Result<String, DotnetRestError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            exp: now.saturating_add(self.token_ttl_secs),
            iat: now,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DotnetRestError::Transport(format!("failed to sign token: {e}")))
    }

    /// Checks signature, expiry and (when configured) issuer and audience.
    pub fn validate_token(&self, token: &str) -> Result<Claims, DotnetRestError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| DotnetRestError::Unauthorized(format!("invalid token: {e}")))
    }

    pub fn authorize(&self, claims: &Claims, operation: Operation) -> Result<(), DotnetRestError> {
        authorize(claims, operation)
    }

    /// Rejects requests without a valid bearer token and makes the [`Claims`] available to
    /// handlers as an `Extension`.
    pub async fn middleware(
        State(auth): State<Self>,
        mut request: Request<Body>,
        next: Next,
    ) -> Result<Response, DotnetRestError> {
        let token = extract_bearer(&request)?;
        let claims = auth.validate_token(token)?;
        debug!(sub = %claims.sub, roles = ?claims.roles, "Authenticated");

        request.extensions_mut().insert(claims);
        Ok(next.run(request).await)
    }
}

fn extract_bearer(request: &Request<Body>) -> Result<&str, DotnetRestError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| DotnetRestError::Unauthorized("missing Authorization header".into()))?;
    let value = header
        .to_str()
        .map_err(|_| DotnetRestError::Unauthorized("malformed Authorization header".into()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => Err(DotnetRestError::Unauthorized(
            "expected a Bearer token".into(),
        )),
    }
}
