#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod application;

#[cfg(feature = "web")]
pub mod site;

#[cfg(feature = "web")]
pub mod team;

#[cfg(feature = "web")]
pub mod update;
