pub mod middleware;
pub mod request_id;

pub use middleware::{admin_auth_middleware, AuthAdmin};
pub use request_id::{request_id_middleware, RequestId};
