mod form;
mod menu;
mod state;

pub use form::{FieldValue, Form, FormField};
pub use menu::MenuItem;
pub use state::{AppState, EditTarget, InputAction, Scene, Status};
