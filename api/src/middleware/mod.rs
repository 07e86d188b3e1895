pub mod cors;
pub mod route_gate;
pub mod session;

pub use cors::create_cors;
pub use route_gate::RouteGate;
pub use session::{to_cookie, CurrentUser, OptionalUser, Session};
