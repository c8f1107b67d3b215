pub mod advisory;

pub use advisory::{Advisory, DateError, NO_CVE_ID};
