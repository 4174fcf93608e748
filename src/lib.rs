//! Front Office Core - umbrella crate
//!
//! Re-exports the workspace crates so consumers (and the workspace
//! integration suite) can depend on a single package.

pub use core_kernel;
pub use domain_audit;
pub use domain_billing;
pub use domain_guest;
pub use domain_payment;
pub use front_office;
