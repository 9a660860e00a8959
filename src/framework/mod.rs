mod dispatch;
pub use dispatch::*;

mod on_error;
pub use on_error::*;

mod reply;
pub use reply::*;

mod server;
pub use server::*;
