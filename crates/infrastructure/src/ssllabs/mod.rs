pub mod client;

pub use client::SslLabsClient;
