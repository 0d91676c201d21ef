pub mod logging;

// Name resolution, pagination and the lookup command handler
pub mod srd;
