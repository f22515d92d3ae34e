//! HTTP utility functions for extracting request information.

use actix_web::{HttpMessage, HttpRequest, http::header};

/// Name of the cookie carrying the access token
pub const TOKEN_COOKIE: &str = "token";

/// Extract client IP address from request headers
///
/// Proxy headers win over the socket address; `X-Forwarded-For` can hold a
/// chain, the first entry is the client.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    for header_name in ["X-Forwarded-For", "X-Real-IP"] {
        if let Some(value) = req.headers().get(header_name).and_then(|h| h.to_str().ok()) {
            let ip = value.split(',').next().unwrap_or(value).trim();
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Address that rate limits and login throttling are counted against
///
/// Forwarded headers are client supplied, so they only count when the
/// server is configured to sit behind a trusted proxy.
pub fn throttle_key(req: &HttpRequest, trust_proxy: bool) -> String {
    if trust_proxy {
        return extract_client_ip(req);
    }
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Extract user agent from request headers
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

/// Access token from `Authorization: Bearer`, falling back to the `token` cookie
pub fn extract_access_token(req: &HttpRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    match bearer {
        Some(token) => Some(token.to_string()),
        None => req
            .cookie(TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|token| !token.is_empty()),
    }
}
