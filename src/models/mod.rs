pub mod stock;
pub mod tool;
pub mod response;

pub use stock::*;
pub use tool::*;
pub use response::*;
