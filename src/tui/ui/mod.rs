mod form;
mod layout;
mod menu;
mod picker;
mod views;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Members | Scene::Catalog => views::draw_view(f, app),
        Scene::EditMember | Scene::EditPublication | Scene::Circulation => {
            if let Some(form) = app.form() {
                form::draw_form(f, app, form);
            } else {
                picker::draw_picker(f, app);
            }
        }
    }
}
