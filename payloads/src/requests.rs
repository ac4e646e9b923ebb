use crate::{BookingId, BookingStatus, ServiceId, Weekday};
use jiff::Timestamp;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const OTP_LEN: usize = 6;

/// Validation result for password-reset OTP codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpValidation {
    Valid,
    WrongLength,
    NotNumeric,
}

impl OtpValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::WrongLength => Some("Code must be exactly 6 digits"),
            Self::NotNumeric => Some("Code can only contain digits"),
        }
    }
}

/// Validate a password-reset OTP before sending it to the backend.
///
/// Rules:
/// - exactly 6 characters
/// - ASCII digits only
pub fn validate_otp(otp: &str) -> OtpValidation {
    if otp.len() != OTP_LEN {
        return OtpValidation::WrongLength;
    }
    if !otp.chars().all(|c| c.is_ascii_digit()) {
        return OtpValidation::NotNumeric;
    }
    OtpValidation::Valid
}

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Kicks off the OTP password-reset email flow.
#[derive(Serialize, Deserialize, Debug)]
pub struct RequestPasswordReset {
    pub email: String,
}

/// Completes the OTP password-reset flow.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConfirmPasswordReset {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RefreshSession {
    pub refresh: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// Filters for the paginated services listing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ServiceFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBooking {
    pub service_id: ServiceId,
    pub scheduled_at: Timestamp,
    pub address: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub reason: Option<String>,
}

/// Providers move bookings through their lifecycle with this; the
/// backend enforces which transitions are legal.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateBookingStatus {
    pub booking_id: BookingId,
    pub status: BookingStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBlockedTime {
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub reason: Option<String>,
}

/// Replaces the provider's full weekly availability in one call. An
/// entry per weekday; days absent from the list are left untouched by
/// the backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWorkingHours {
    pub working_hours: Vec<WorkingHoursEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursEntry {
    pub weekday: Weekday,
    pub start_time: Time,
    pub end_time: Time,
    pub is_available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateSlots {
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessage {
    pub body: Option<String>,
    pub voice_clip: Option<crate::responses::VoiceClip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_validation_rules() {
        assert!(validate_otp("014233").is_valid());
        assert_eq!(validate_otp("01423"), OtpValidation::WrongLength);
        assert_eq!(validate_otp("0142334"), OtpValidation::WrongLength);
        assert_eq!(validate_otp("01a233"), OtpValidation::NotNumeric);
        assert_eq!(validate_otp("۰۱۴۲۳۳"), OtpValidation::WrongLength);
    }
}
