//! Platform-neutral helpers shared by the views.

pub mod format;
pub mod geolocation;
pub mod storage;
pub mod timing;
