use crate::selection::Selection;

use super::{AppState, EditTarget, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MenuItem {
    Members,
    Publications,
    AddMember,
    EditMember,
    EditPublication,
    CheckOut,
    CheckIn,
}

pub(crate) const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem::Members,
    MenuItem::Publications,
    MenuItem::AddMember,
    MenuItem::EditMember,
    MenuItem::EditPublication,
    MenuItem::CheckOut,
    MenuItem::CheckIn,
];

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Members => "Display all current library members",
            MenuItem::Publications => "View all publications in the library",
            MenuItem::AddMember => "Add a library member",
            MenuItem::EditMember => "Edit data of a current library member",
            MenuItem::EditPublication => "Edit a publication",
            MenuItem::CheckOut => "Check out a publication",
            MenuItem::CheckIn => "Check in a publication",
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.label()))
            .collect()
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    /// Enter the scene behind the highlighted menu entry.
    pub fn menu_apply(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        self.open(item);
    }

    pub fn open(&mut self, item: MenuItem) {
        self.reset_scene_state();
        self.scene = match item {
            MenuItem::Members => Scene::Members,
            MenuItem::Publications => Scene::Catalog,
            MenuItem::AddMember => {
                self.edit_target = Some(EditTarget::NewMember);
                self.form = Some(Self::member_form("Add library member", "", ""));
                Scene::EditMember
            }
            MenuItem::EditMember => {
                if self.library.members().is_empty() {
                    self.set_status("No current members.", true);
                    return;
                }
                Scene::EditMember
            }
            MenuItem::EditPublication => {
                if self.library.is_empty() {
                    self.set_status("No library publications listed.", true);
                    return;
                }
                Scene::EditPublication
            }
            MenuItem::CheckOut => {
                self.selection = Some(Selection::check_out());
                Scene::Circulation
            }
            MenuItem::CheckIn => {
                self.selection = Some(Selection::check_in());
                Scene::Circulation
            }
        };
    }

    pub fn back_to_menu(&mut self) {
        self.reset_scene_state();
        self.scene = Scene::Menu;
    }
}
