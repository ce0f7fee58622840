pub mod device;
pub mod dispatch;
pub mod posture;
pub mod schema;
pub mod shared;
pub mod summary;
pub mod trace;
pub mod warp;
