pub mod claims;
pub mod extraction;
pub mod schemes;
