pub mod aggregate;
pub mod dto;

pub use aggregate::{Order, OrderId};
pub use dto::{
    MutationResponse, NewOrdersCountResponse, OrderDetailsResponse, OrderStats,
    UpdateStatusRequest,
};
