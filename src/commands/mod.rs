pub mod compute;
pub mod configure;
pub mod demo;
