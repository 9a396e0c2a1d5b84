mod attendance;
pub mod client;
mod leave;
mod overtime;
pub mod query;
mod reports;
mod stores;
pub mod token;
pub mod types;
mod users;

pub use client::*;
pub use query::ListQuery;
pub use token::{LocalStorageTokenStore, MemoryTokenStore, TokenStore};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
