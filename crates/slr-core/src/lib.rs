pub mod config;
pub mod gate;
pub mod logging;
pub mod navigation;
pub mod redirector;
pub mod store;
pub mod translate;
pub mod url_model;

pub use translate::{translate, LaunchUri};
