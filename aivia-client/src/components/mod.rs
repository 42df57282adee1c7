mod alert;
mod auth_card;
mod form_field;
mod sidebar;
mod social;
mod user_button;

pub use alert::ErrorBanner;
pub use auth_card::AuthCard;
pub use form_field::FormField;
pub use sidebar::DashboardSidebar;
pub use social::SocialButtons;
pub use user_button::DashboardUserButton;
