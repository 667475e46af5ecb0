pub mod http;
pub mod retrying;

pub use self::http::HttpGenerationClient;
pub use self::retrying::{RetryPolicy, RetryingGenerationClient};
