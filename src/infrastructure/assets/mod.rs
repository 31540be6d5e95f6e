pub mod public_base_url;
pub mod traits;
