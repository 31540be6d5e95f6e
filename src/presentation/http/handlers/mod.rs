pub mod catalogues;
pub mod health;
