pub mod host;
pub mod input_adapter;
