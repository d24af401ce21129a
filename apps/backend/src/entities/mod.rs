pub mod sessions;

pub use sessions::Model as SessionRecord;
pub use sessions::SessionStatus;
