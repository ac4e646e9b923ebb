pub mod booking_card;
pub mod login_form;
pub mod navbar;
pub mod pagination_controls;
pub mod service_card;
pub mod toast;
pub mod voice_player;
pub mod voice_recorder;

pub use booking_card::{BookingCard, StatusBadge};
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use pagination_controls::PaginationControls;
pub use service_card::ServiceCard;
pub use toast::ToastContainer;
pub use voice_player::VoicePlayer;
pub use voice_recorder::VoiceRecorder;
