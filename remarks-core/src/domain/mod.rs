//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external
//! dependencies.

pub mod annotation;
pub mod discount;
mod notification;
pub mod result;
pub mod user;

pub use annotation::{extract_annotations, parse_marker, Annotation, AnnotationTag, Marker, Severity};
pub use discount::{calculate_discount, CustomerTier, DISCOUNT_THRESHOLD};
pub use notification::{Channel, Notification};
#[allow(deprecated)]
pub use user::create_user_legacy;
pub use user::{create_user, validate_email, User, UserRole, MIN_PASSWORD_LEN};
