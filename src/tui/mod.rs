//! Terminal front end. All library state lives in [`app::AppState`]; `ui`
//! only draws it and `controller` maps keys to [`app::InputAction`]s.

pub mod app;
pub mod controller;
pub mod ui;
