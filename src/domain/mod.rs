//! Domain types for the manpower portal
//! Defines the recruitment records and vocabularies shared by every view.

pub mod candidate;
pub mod error;
pub mod interview;
pub mod kpi;
pub mod notification;
pub mod session;
pub mod upload;
pub mod vacancy;

pub use candidate::*;
pub use error::*;
pub use interview::*;
pub use kpi::*;
pub use notification::*;
pub use session::*;
pub use upload::*;
pub use vacancy::*;
