//! Persisted XML interchange format between extraction and viewing.
//!
//! ```text
//! <dbprops>
//!   <dbid id="..." type="..." title="..." syntax="...">
//!     <parameter>raw line</parameter>
//!   </dbid>
//! </dbprops>
//! ```

pub mod reader;
pub mod writer;

pub const ROOT_TAG: &str = "dbprops";
pub const RECORD_TAG: &str = "dbid";
pub const PARAMETER_TAG: &str = "parameter";

pub use reader::{load, parse};
pub use writer::{render, save};
