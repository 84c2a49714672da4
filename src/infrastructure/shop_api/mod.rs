pub mod client;
pub mod payload;

pub use client::{SHOP_API_URL, ShopApiClient};
