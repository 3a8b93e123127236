pub static API_BASE_URL: &str = "https://api.wanikani.com/v2";

/// Pins the response format; newer revisions rename and drop fields the models rely on.
pub static API_REVISION: &str = "20170710";

pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
