use crate::{
    BlockedTimeId, BookingId, BookingStatus, ConversationId, MessageId,
    NotificationId, ServiceId, UserId, UserRole, Weekday,
};
use jiff::Timestamp;
use jiff::civil::{Date, Time};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User identification bundled with display information
///
/// This is the standard way to reference users in API responses.
/// The frontend should display full_name (if present) or username,
/// but use user_id for any API calls that reference the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub username: String,
    pub full_name: Option<String>,
}

impl UserIdentity {
    /// Preferred display string for the user.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// Tokens plus profile returned by a successful login or token refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

/// The single pagination shape the backend is contracted to return.
///
/// Every paginating list endpoint returns exactly this wrapper. A
/// response that deviates from it is a parse error, never an excuse to
/// probe alternative keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub rating: Option<f64>,
    pub review_count: u32,
    pub provider: UserIdentity,
    pub image_url: Option<String>,
}

/// Condensed service info embedded in bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub title: String,
    pub category: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub booking_number: String,
    pub service: ServiceSummary,
    pub customer: UserIdentity,
    pub status: BookingStatus,
    pub scheduled_at: Timestamp,
    pub price: Decimal,
    pub address: Option<String>,
    pub created_at: Timestamp,
}

/// A provider's weekly availability for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub weekday: Weekday,
    pub start_time: Time,
    pub end_time: Time,
    pub is_available: bool,
}

/// A one-off window a provider has blocked out of their schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedTime {
    pub id: BlockedTimeId,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSchedule {
    pub working_hours: Vec<WorkingHours>,
    pub blocked_times: Vec<BlockedTime>,
}

/// Result of asking the backend to materialize bookable slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGenerationResult {
    pub slots_created: u32,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyEarnings {
    pub year: i16,
    pub month: i8,
    pub gross: Decimal,
    pub net: Decimal,
    pub bookings_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    pub total_earnings: Decimal,
    pub pending_payouts: Decimal,
    pub this_month: Decimal,
    pub monthly: Vec<MonthlyEarnings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// One admin-visible audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u64,
    pub actor: UserIdentity,
    pub action: String,
    pub target: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub participant: UserIdentity,
    pub last_message_preview: Option<String>,
    pub unread_count: u32,
    pub updated_at: Timestamp,
}

/// A recorded voice clip attached to a message. The audio travels as
/// base64 inside the JSON body; the browser plays it through a data
/// URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceClip {
    pub data: String,
    pub mime_type: String,
    pub duration_seconds: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: UserIdentity,
    pub body: Option<String>,
    pub voice_clip: Option<VoiceClip>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}
