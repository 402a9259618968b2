pub mod gateway;
pub mod presenter;
pub mod view_flow;
