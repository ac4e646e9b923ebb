use crate::{
    BlockedTimeId, BookingId, ConversationId, NotificationId, ServiceId,
    SessionProvider, requests, responses,
};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::Arc;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// The session provider is injected at construction so token handling
/// is explicit: the client reads a bearer token per request and never
/// looks at ambient browser storage itself.
pub struct APIClient {
    address: String,
    session: Arc<dyn SessionProvider>,
    inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(
        address: impl Into<String>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            address: address.into(),
            session,
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.get(self.format_url(path)))
            .send()
            .await
    }

    async fn get_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ReqwestResult {
        self.authorize(
            self.inner_client.get(self.format_url(path)).query(query),
        )
        .send()
        .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(
            self.inner_client.post(self.format_url(path)).json(body),
        )
        .send()
        .await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.post(self.format_url(path)))
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.authorize(self.inner_client.put(self.format_url(path)).json(body))
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.authorize(self.inner_client.delete(self.format_url(path)))
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.get("health_check").await?;
        ok_empty(response).await
    }

    /// Exchange credentials for bearer tokens. The only endpoint besides
    /// the password-reset pair that is expected to run without a token.
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::AuthTokens, ClientError> {
        let response = self.post("auth/login", details).await?;
        ok_body(response).await
    }

    /// Request a password reset OTP email for the given address.
    pub async fn request_password_reset(
        &self,
        details: &requests::RequestPasswordReset,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("auth/password-reset", details).await?;
        ok_body(response).await
    }

    /// Complete the OTP flow with a new password.
    pub async fn confirm_password_reset(
        &self,
        details: &requests::ConfirmPasswordReset,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response =
            self.post("auth/password-reset/confirm", details).await?;
        ok_body(response).await
    }

    pub async fn refresh_session(
        &self,
        details: &requests::RefreshSession,
    ) -> Result<responses::AuthTokens, ClientError> {
        let response = self.post("auth/token/refresh", details).await?;
        ok_body(response).await
    }

    /// Get the current user's profile information.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.get("users/me").await?;
        ok_body(response).await
    }

    pub async fn update_profile(
        &self,
        details: &requests::UpdateProfile,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.put("users/me", details).await?;
        ok_body(response).await
    }

    pub async fn list_services(
        &self,
        filter: &requests::ServiceFilter,
    ) -> Result<responses::Envelope<responses::Service>, ClientError> {
        let mut query: Vec<(&str, String)> = vec![
            ("offset", filter.offset.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        if let Some(search) = &filter.search {
            query.push(("search", search.clone()));
        }
        let response = self.get_query("services", &query).await?;
        ok_body(response).await
    }

    pub async fn get_service(
        &self,
        service_id: &ServiceId,
    ) -> Result<responses::Service, ClientError> {
        let response = self.get(&format!("services/{service_id}")).await?;
        ok_body(response).await
    }

    /// Get the current customer's bookings, newest first.
    pub async fn list_bookings(
        &self,
        page: &requests::Page,
    ) -> Result<responses::Envelope<responses::Booking>, ClientError> {
        let query = [
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let response = self.get_query("bookings", &query).await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("bookings", details).await?;
        ok_body(response).await
    }

    pub async fn cancel_booking(
        &self,
        details: &requests::CancelBooking,
    ) -> Result<responses::Booking, ClientError> {
        let response = self
            .post(&format!("bookings/{}/cancel", details.booking_id), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("bookings/{booking_id}")).await?;
        ok_empty(response).await
    }

    /// Bookings addressed to the current provider.
    pub async fn list_provider_bookings(
        &self,
        page: &requests::Page,
    ) -> Result<responses::Envelope<responses::Booking>, ClientError> {
        let query = [
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let response = self.get_query("provider/bookings", &query).await?;
        ok_body(response).await
    }

    pub async fn update_booking_status(
        &self,
        details: &requests::UpdateBookingStatus,
    ) -> Result<responses::Booking, ClientError> {
        let response = self
            .post(
                &format!("provider/bookings/{}/status", details.booking_id),
                details,
            )
            .await?;
        ok_body(response).await
    }

    pub async fn get_provider_schedule(
        &self,
    ) -> Result<responses::ProviderSchedule, ClientError> {
        let response = self.get("provider-dashboard/schedule").await?;
        ok_body(response).await
    }

    /// Replace the weekly availability; returns the updated schedule.
    pub async fn update_working_hours(
        &self,
        details: &requests::UpdateWorkingHours,
    ) -> Result<responses::ProviderSchedule, ClientError> {
        let response =
            self.put("provider-dashboard/schedule", details).await?;
        ok_body(response).await
    }

    pub async fn create_blocked_time(
        &self,
        details: &requests::CreateBlockedTime,
    ) -> Result<responses::BlockedTime, ClientError> {
        let response = self.post("provider-schedule", details).await?;
        ok_body(response).await
    }

    pub async fn delete_blocked_time(
        &self,
        blocked_time_id: &BlockedTimeId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("provider-schedule/{blocked_time_id}"))
            .await?;
        ok_empty(response).await
    }

    pub async fn generate_booking_slots(
        &self,
        details: &requests::GenerateSlots,
    ) -> Result<responses::SlotGenerationResult, ClientError> {
        let response = self.post("booking-slots/generate", details).await?;
        ok_body(response).await
    }

    pub async fn get_provider_earnings(
        &self,
    ) -> Result<responses::EarningsReport, ClientError> {
        let response = self.get("provider/earnings").await?;
        ok_body(response).await
    }

    pub async fn list_notifications(
        &self,
        page: &requests::Page,
    ) -> Result<responses::Envelope<responses::Notification>, ClientError>
    {
        let query = [
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let response = self.get_query("notifications", &query).await?;
        ok_body(response).await
    }

    pub async fn mark_notification_read(
        &self,
        notification_id: &NotificationId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_post(&format!("notifications/{notification_id}/read"))
            .await?;
        ok_empty(response).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ClientError> {
        let response = self.empty_post("notifications/read-all").await?;
        ok_empty(response).await
    }

    pub async fn list_activity_logs(
        &self,
        page: &requests::Page,
    ) -> Result<responses::Envelope<responses::ActivityLog>, ClientError>
    {
        let query = [
            ("offset", page.offset.to_string()),
            ("limit", page.limit.to_string()),
        ];
        let response = self.get_query("activity-logs", &query).await?;
        ok_body(response).await
    }

    pub async fn list_conversations(
        &self,
    ) -> Result<Vec<responses::Conversation>, ClientError> {
        let response = self.get("conversations").await?;
        ok_body(response).await
    }

    pub async fn list_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<responses::Message>, ClientError> {
        let response = self
            .get(&format!("conversations/{conversation_id}/messages"))
            .await?;
        ok_body(response).await
    }

    pub async fn send_message(
        &self,
        conversation_id: &ConversationId,
        details: &requests::SendMessage,
    ) -> Result<responses::Message, ClientError> {
        let response = self
            .post(
                &format!("conversations/{conversation_id}/messages"),
                details,
            )
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server responded with a failure status. The message comes
    /// from the response body when it carries one.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// A success response whose body does not match the contracted
    /// shape.
    #[error("Unexpected response from server")]
    Parse(String),
}

impl ClientError {
    /// True when the failure indicates the bearer token is no longer
    /// valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Api { status, .. } if *status == StatusCode::UNAUTHORIZED
        )
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend is inconsistent about the key it uses (`message`,
/// `detail`, or `error`), so all three are accepted; anything else
/// falls back to a generic string with the status code.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "detail", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("Request failed with status {}", status.as_u16())
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ClientError::Api {
        status,
        message: error_message(status, &body),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{Envelope, Notification};

    #[test]
    fn error_message_prefers_body_fields() {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(
            error_message(status, r#"{"error": "Internal Server Error"}"#),
            "Internal Server Error"
        );
        assert_eq!(
            error_message(status, r#"{"detail": "Not found."}"#),
            "Not found."
        );
        assert_eq!(
            error_message(status, r#"{"message": "No slot available"}"#),
            "No slot available"
        );
    }

    #[test]
    fn error_message_falls_back_when_body_is_unhelpful() {
        let status = StatusCode::BAD_GATEWAY;
        assert_eq!(
            error_message(status, "<html>bad gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(
            error_message(status, r#"{"code": 17}"#),
            "Request failed with status 502"
        );
        assert_eq!(
            error_message(status, ""),
            "Request failed with status 502"
        );
    }

    #[test]
    fn envelope_rejects_alternate_pagination_shapes() {
        // `items` instead of `results` must not silently parse.
        let deviant = r#"{"count": 1, "next": null, "previous": null,
                          "items": []}"#;
        assert!(
            serde_json::from_str::<Envelope<Notification>>(deviant).is_err()
        );
    }
}
