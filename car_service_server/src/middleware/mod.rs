mod session;

pub use session::{SessionMiddlewareFactory, SessionMiddlewareService};
