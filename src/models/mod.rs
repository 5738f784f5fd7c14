mod client;

pub use client::{Client, ClientPatch, ClientQuery, NewClient};
pub(crate) use client::provided;
