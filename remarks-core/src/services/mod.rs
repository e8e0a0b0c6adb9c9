//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod demo;
mod notification;
mod payment;
mod scan;
pub mod transform;
mod user;

pub use demo::{DemoReport, DemoService};
pub use notification::NotificationService;
pub use payment::{PaymentReceipt, PaymentService};
pub use scan::{ScanReport, ScanService};
pub use transform::uppercase_all;
pub use user::UserService;
