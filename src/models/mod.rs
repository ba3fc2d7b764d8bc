mod product;
mod requests;
mod response;

pub use product::*;
pub use requests::*;
pub use response::*;
