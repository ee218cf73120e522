// URL template exports
pub mod urls;

pub use urls::{find_profile_url, like_url, likes_url, profile_url};
