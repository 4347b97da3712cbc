//! dbprops — extract `dbid` records from property dumps and browse them.
//!
//! Two pipelines share one XML interchange file:
//!
//! - **extract**: raw dump → [`extract::filter`] → [`extract::builder`] →
//!   [`xml::writer`]
//! - **view**: [`xml::reader`] → [`metadata`] / [`params`] → [`viewer`],
//!   with comments kept by [`comments`]

pub mod comments;
pub mod extract;
pub mod metadata;
pub mod model;
pub mod params;
pub mod render;
pub mod viewer;
pub mod xml;
