//! Audit logging data structures and types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Types of authentication and authorization events for audit logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    LoginSuccess,
    LoginFailure,
    SignupSuccess,
    SignupFailure,
    Logout,
    AccessDenied,
    RateLimitExceeded,
    SuspiciousActivity,
}

/// Outcomes of authentication events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    Failure,
}

impl AuthEventType {
    pub fn outcome(self) -> AuthEventOutcome {
        match self {
            Self::LoginSuccess | Self::SignupSuccess | Self::Logout => AuthEventOutcome::Success,
            _ => AuthEventOutcome::Failure,
        }
    }
}

/// Structured audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub user_id: Option<i32>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
    pub additional_context: Option<String>,
}

impl AuthAuditEvent {
    pub fn new(
        event_type: AuthEventType,
        ip_address: impl Into<String>,
        method: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            outcome: event_type.outcome(),
            timestamp: Utc::now(),
            ip_address: ip_address.into(),
            user_agent: None,
            user_id: None,
            method: method.into(),
            endpoint: endpoint.into(),
            request_id: None,
            additional_context: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = Some(context.into());
        self
    }

    /// Emit the event on the `auth_audit` target; failures log at warn level.
    pub fn log(&self) {
        match self.outcome {
            AuthEventOutcome::Success => info!(
                target: "auth_audit",
                event_type = ?self.event_type,
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                user_id = ?self.user_id,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                additional_context = ?self.additional_context,
                "Authentication audit event"
            ),
            AuthEventOutcome::Failure => warn!(
                target: "auth_audit",
                event_type = ?self.event_type,
                outcome = ?self.outcome,
                timestamp = %self.timestamp,
                ip_address = %self.ip_address,
                user_agent = ?self.user_agent,
                user_id = ?self.user_id,
                method = %self.method,
                endpoint = %self.endpoint,
                request_id = ?self.request_id,
                additional_context = ?self.additional_context,
                "Authentication audit event"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_follows_event_type() {
        let event = AuthAuditEvent::new(AuthEventType::AccessDenied, "10.0.0.1", "GET", "/user");
        assert_eq!(event.outcome, AuthEventOutcome::Failure);

        let event = AuthAuditEvent::new(AuthEventType::LoginSuccess, "10.0.0.1", "POST", "/auth");
        assert_eq!(event.outcome, AuthEventOutcome::Success);
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let event = AuthAuditEvent::new(AuthEventType::LoginFailure, "10.0.0.1", "POST", "/auth")
            .with_user_id(Some(3))
            .with_request_id(Some("abc".to_string()))
            .with_context("bad password");
        assert_eq!(event.user_id, Some(3));
        assert_eq!(event.request_id.as_deref(), Some("abc"));
        assert_eq!(event.additional_context.as_deref(), Some("bad password"));
    }
}
