mod http;

pub use http::HttpImageHost;
