//! Dataset Provider
//!
//! Fixed in-memory tables behind the dashboard:
//!
//! - **types**: Records, tables and the `Dataset` bundle
//! - **provider**: The compiled-in demonstration data
//! - **error**: Invariant violations
//!
//! # Example
//!
//! ```rust
//! use onu_haiti::data::load_data;
//!
//! let (departments, themes) = load_data();
//! assert_eq!(departments.len(), 10);
//! assert_eq!(themes.len(), 6);
//! ```

pub mod error;
pub mod provider;
pub mod types;

pub use error::{DataError, DataResult};
pub use provider::load_data;
pub use types::{DepartmentRecord, DepartmentTable, Dataset, ThemeRecord, ThemeTable};
