pub mod analyze;
pub mod dispatch;
pub mod new;
pub mod session;
pub mod suggest;
