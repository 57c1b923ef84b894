pub mod exit;
pub mod health;
pub mod ticker;
