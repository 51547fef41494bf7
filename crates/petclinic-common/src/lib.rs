//! Petclinic-Common: Shared types, IDs, and error handling.
//!
//! This crate provides common functionality used across petclinic:
//!
//! - **Typed IDs**: Type-safe UUID wrappers for owners, pets, veterinarians,
//!   and appointments
//! - **Core Types**: The appointment status enum
//! - **Error Handling**: Common error type and result alias
//!
//! # Examples
//!
//! ```
//! use petclinic_common::{OwnerId, AppointmentStatus, Error, Result};
//!
//! // Create typed IDs
//! let owner_id = OwnerId::new();
//!
//! // Appointments start out scheduled
//! assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::not_found("owner"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
