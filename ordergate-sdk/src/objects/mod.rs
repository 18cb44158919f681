pub mod payments;

pub use payments::{
    CheckStatusResponse, CreateOrderRequest, CreateOrderResponse, ErrorResponse,
};
