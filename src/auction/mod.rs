pub mod dto;
pub mod model;

pub use model::{stored_now, stored_timestamp, Auction, Item, Status};
