use crate::config::Settings;
use crate::display::{availability, copy_rows, detail_lines};
use crate::library::Library;
use crate::member::Person;
use crate::publication::{
    BookFormat, MusicFormat, Publication, PublicationEdit, PublicationKind, PublicationType,
    Resolution,
};
use crate::seed;
use crate::selection::{Flow, Selection, Step};
use std::time::{Duration, Instant};

use super::form::{Form, FormField};
use super::menu::MENU_ITEMS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Members,
    Catalog,
    EditMember,
    EditPublication,
    Circulation,
}

/// What an open form will write to on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditTarget {
    NewMember,
    Member(usize),
    Publication(PublicationType, usize),
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Back,
    NextField,
    PrevField,
    Char(char),
    Backspace,
    /// Pick entry `n` (0-based) of the current menu or list.
    Jump(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub error: bool,
    at: Instant,
}

impl Status {
    fn new(text: impl Into<String>, error: bool) -> Self {
        Self { text: text.into(), error, at: Instant::now() }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    pub library: Library,
    pub menu_index: usize,
    // List cursor in picker scenes
    pub cursor: usize,
    // First visible line in the member/catalog views
    pub scroll: usize,
    pub(crate) selection: Option<Selection>,
    pub(crate) edit_target: Option<EditTarget>,
    pub(crate) edit_kind: Option<PublicationType>,
    pub(crate) form: Option<Form>,
    status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(seed::demo_library())
    }
}

impl AppState {
    const STATUS_TTL: Duration = Duration::from_secs(4);

    pub fn new(library: Library) -> Self {
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            library,
            menu_index: 0,
            cursor: 0,
            scroll: 0,
            selection: None,
            edit_target: None,
            edit_kind: None,
            form: None,
            status: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        if settings.empty {
            Self::new(Library::default())
        } else {
            Self::default()
        }
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, error: bool) {
        self.status = Some(Status::new(text, error));
    }

    pub(crate) fn reset_scene_state(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
        self.selection = None;
        self.edit_target = None;
        self.edit_kind = None;
        self.form = None;
    }

    /// Periodic housekeeping; expires the status line.
    pub fn on_tick(&mut self) {
        if let Some(s) = &self.status {
            if s.at.elapsed() >= Self::STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn member_form(title: &str, name: &str, email: &str) -> Form {
        Form::new(title, vec![FormField::text("Name", name), FormField::text("Email", email)])
    }

    fn publication_form(publication: &Publication) -> Form {
        let kind = publication.publication_type();
        let mut fields = vec![
            FormField::text("Title", publication.title()),
            FormField::text("Author", publication.author()),
        ];
        match publication.kind() {
            PublicationKind::Book { pages, format } => {
                fields.push(FormField::number("Pages", *pages));
                fields.push(FormField::choice("Format", BookFormat::LABELS, format.ordinal()));
            }
            PublicationKind::Music { duration_secs, format } => {
                fields.push(FormField::number("Duration (seconds)", *duration_secs));
                fields.push(FormField::choice("Format", MusicFormat::LABELS, format.ordinal()));
            }
            PublicationKind::Video { producer, resolution } => {
                fields.push(FormField::text("Producer", producer));
                let selected = resolution.ordinal();
                fields.push(FormField::choice("Resolution", Resolution::LABELS, selected));
            }
        }
        Form::new(format!("Edit {}", kind.label().to_lowercase()), fields)
    }

    /// Whether the current scene is showing a selectable list.
    pub fn picker_active(&self) -> bool {
        match self.scene {
            Scene::EditMember | Scene::EditPublication => self.form.is_none(),
            Scene::Circulation => self.selection.as_ref().is_some_and(|s| !s.is_finished()),
            _ => false,
        }
    }

    pub fn picker_title(&self) -> String {
        match self.scene {
            Scene::EditMember => "Select the member to edit".to_string(),
            Scene::EditPublication => match self.edit_kind {
                None => "Select publication type to edit".to_string(),
                Some(kind) => format!("Select the {} to edit", kind.label().to_lowercase()),
            },
            Scene::Circulation => {
                let Some(sel) = &self.selection else {
                    return String::new();
                };
                let verb = sel.flow().label().to_lowercase();
                match sel.step() {
                    Step::ChooseType => format!("Select publication type to {verb}"),
                    Step::ChoosePublication { .. } => format!("Select the publication to {verb}"),
                    Step::ChooseCopy { .. } => format!("Select the copy number to {verb}"),
                    Step::ChooseMember { copy, .. } => {
                        format!("Copy {} is available. Select the member checking it out", copy + 1)
                    }
                    Step::Report(_) => String::new(),
                }
            }
            _ => String::new(),
        }
    }

    pub fn picker_items(&self) -> Vec<String> {
        let types = || -> Vec<String> {
            PublicationType::ALL.iter().map(|k| k.label().to_string()).collect()
        };
        match self.scene {
            Scene::EditMember if self.form.is_none() => self.member_items(),
            Scene::EditPublication if self.form.is_none() => match self.edit_kind {
                None => types(),
                Some(kind) => self.shelf_items(kind),
            },
            Scene::Circulation => match self.selection.as_ref().map(Selection::step) {
                Some(Step::ChooseType) => types(),
                Some(Step::ChoosePublication { kind }) => self.shelf_items(*kind),
                Some(Step::ChooseCopy { kind, publication }) => self
                    .library
                    .publication(*kind, *publication)
                    .map(|p| {
                        copy_rows(p, self.library.members())
                            .into_iter()
                            .map(|r| {
                                format!(
                                    "Copy {}  checked out: {:<3}  borrower: {}",
                                    r.number,
                                    r.checked_out_label(),
                                    r.borrower
                                )
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
                Some(Step::ChooseMember { .. }) => self.member_items(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn member_items(&self) -> Vec<String> {
        self.library
            .members()
            .iter()
            .map(|p| format!("{} <{}> (ID {})", p.name(), p.email(), p.id()))
            .collect()
    }

    fn shelf_items(&self, kind: PublicationType) -> Vec<String> {
        self.library
            .shelf(kind)
            .iter()
            .map(|p| format!("{} by {} ({})", p.title(), p.author(), availability(p)))
            .collect()
    }

    /// Plain text of the member or catalog view.
    pub fn view_lines(&self) -> Vec<String> {
        match self.scene {
            Scene::Members => members_view(self.library.members().as_slice()),
            Scene::Catalog => catalog_view(&self.library),
            _ => Vec::new(),
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if self.form.is_some() {
            return self.handle_form_input(action);
        }
        match self.scene {
            Scene::Menu => {
                match action {
                    InputAction::Up => self.menu_prev(),
                    InputAction::Down => self.menu_next(),
                    InputAction::Enter => self.menu_apply(),
                    InputAction::Jump(n) if n < MENU_ITEMS.len() => {
                        self.menu_index = n;
                        self.menu_apply();
                    }
                    _ => {}
                }
                false
            }
            Scene::Members | Scene::Catalog => {
                match action {
                    InputAction::Up => self.scroll = self.scroll.saturating_sub(1),
                    InputAction::Down => {
                        let max = self.view_lines().len().saturating_sub(1);
                        self.scroll = (self.scroll + 1).min(max);
                    }
                    InputAction::Back | InputAction::Enter => self.back_to_menu(),
                    _ => {}
                }
                false
            }
            Scene::EditMember | Scene::EditPublication | Scene::Circulation => {
                if !self.picker_active() {
                    if matches!(action, InputAction::Enter | InputAction::Back) {
                        self.back_to_menu();
                    }
                    return false;
                }
                let len = self.picker_items().len();
                match action {
                    InputAction::Up if len > 0 => {
                        self.cursor = (self.cursor + len - 1) % len;
                        false
                    }
                    InputAction::Down if len > 0 => {
                        self.cursor = (self.cursor + 1) % len;
                        false
                    }
                    InputAction::Enter => self.pick(self.cursor),
                    InputAction::Jump(n) => self.pick(n),
                    InputAction::Back => {
                        self.back_to_menu();
                        false
                    }
                    _ => false,
                }
            }
        }
    }

    /// Act on list entry `index`. Returns true when the library was mutated.
    pub fn pick(&mut self, index: usize) -> bool {
        let len = self.picker_items().len();
        if index >= len {
            self.set_status(format!("Invalid selection: {} (have {len})", index + 1), true);
            return false;
        }
        self.cursor = 0;
        match self.scene {
            Scene::EditMember => {
                if let Some(p) = self.library.members().at(index) {
                    self.form = Some(Self::member_form("Edit library member", p.name(), p.email()));
                    self.edit_target = Some(EditTarget::Member(index));
                }
                false
            }
            Scene::EditPublication => {
                match self.edit_kind {
                    None => {
                        let kind = PublicationType::ALL[index];
                        if self.library.shelf(kind).is_empty() {
                            self.set_status(format!("No current {}.", shelf_noun(kind)), true);
                        } else {
                            self.edit_kind = Some(kind);
                        }
                    }
                    Some(kind) => {
                        if let Some(p) = self.library.publication(kind, index) {
                            self.form = Some(Self::publication_form(p));
                            self.edit_target = Some(EditTarget::Publication(kind, index));
                        }
                    }
                }
                false
            }
            Scene::Circulation => self.advance_selection(index),
            _ => false,
        }
    }

    fn advance_selection(&mut self, index: usize) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            return false;
        };
        let result = match sel.step().clone() {
            Step::ChooseType => {
                let kind = PublicationType::ALL[index];
                if self.library.shelf(kind).is_empty() {
                    let text = format!("No current {}.", shelf_noun(kind));
                    self.status = Some(Status::new(text, true));
                    return false;
                }
                sel.choose_type(kind)
            }
            Step::ChoosePublication { .. } => {
                if sel.flow() == Flow::CheckOut && self.library.members().is_empty() {
                    self.status = Some(Status::new("No current members.", true));
                    return false;
                }
                sel.choose_publication(&self.library, index)
            }
            Step::ChooseCopy { .. } => sel.choose_copy(&mut self.library, index),
            Step::ChooseMember { .. } => sel.choose_member(&mut self.library, index),
            Step::Report(_) => return false,
        };
        if let Err(err) = result {
            self.status = Some(Status::new(err.to_string(), true));
            return false;
        }
        let finished = sel.report().map(|r| (r.message(), r.succeeded()));
        match finished {
            Some((message, ok)) => {
                self.set_status(message, !ok);
                ok
            }
            None => false,
        }
    }

    fn handle_form_input(&mut self, action: InputAction) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        match action {
            InputAction::Up | InputAction::PrevField => form.prev_field(),
            InputAction::Down | InputAction::NextField => form.next_field(),
            InputAction::Left => form.cycle(-1),
            InputAction::Right => form.cycle(1),
            InputAction::Char(c) => form.push_char(c),
            InputAction::Backspace => form.backspace(),
            InputAction::Back => self.back_to_menu(),
            InputAction::Enter => return self.submit_form(),
            InputAction::Jump(_) => {}
        }
        false
    }

    /// Apply the open form. On a validation error the form stays open with
    /// the message; on success the app returns to the menu.
    pub fn submit_form(&mut self) -> bool {
        let (Some(form), Some(target)) = (self.form.as_ref(), self.edit_target) else {
            return false;
        };
        let result: Result<String, String> = match target {
            EditTarget::NewMember => self
                .library
                .members_mut()
                .register(form.text(0), form.text(1))
                .map(|id| format!("Library member added (ID {id})"))
                .map_err(|e| e.to_string()),
            EditTarget::Member(index) => self
                .library
                .members_mut()
                .edit(index, form.text(0), form.text(1))
                .map(|()| "Library member edited".to_string())
                .map_err(|e| e.to_string()),
            EditTarget::Publication(kind, index) => publication_edit(kind, form).and_then(|edit| {
                self.library
                    .edit_publication(kind, index, edit)
                    .map(|()| format!("Library {} edited", kind.label().to_lowercase()))
                    .map_err(|e| e.to_string())
            }),
        };
        match result {
            Ok(message) => {
                self.back_to_menu();
                self.set_status(message, false);
                true
            }
            Err(message) => {
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(message);
                }
                false
            }
        }
    }
}

fn shelf_noun(kind: PublicationType) -> &'static str {
    match kind {
        PublicationType::Book => "books",
        PublicationType::Music => "music",
        PublicationType::Video => "videos",
    }
}

fn publication_edit(kind: PublicationType, form: &Form) -> Result<PublicationEdit, String> {
    let kind = match kind {
        PublicationType::Book => PublicationKind::Book {
            pages: form.number(2)?,
            format: BookFormat::ALL.get(form.choice(3)).copied().unwrap_or(BookFormat::Hardcover),
        },
        PublicationType::Music => PublicationKind::Music {
            duration_secs: form.number(2)?,
            format: MusicFormat::ALL.get(form.choice(3)).copied().unwrap_or(MusicFormat::Cd),
        },
        PublicationType::Video => PublicationKind::Video {
            producer: form.text(2).to_string(),
            resolution: Resolution::ALL.get(form.choice(3)).copied().unwrap_or(Resolution::Sd),
        },
    };
    Ok(PublicationEdit { title: form.text(0).to_string(), author: form.text(1).to_string(), kind })
}

fn members_view(members: &[Person]) -> Vec<String> {
    if members.is_empty() {
        return vec!["No current members.".to_string()];
    }
    let mut lines = Vec::with_capacity(members.len() * 5);
    for (i, m) in members.iter().enumerate() {
        lines.push(format!("#{}", i + 1));
        lines.push(format!("Name: {}", m.name()));
        lines.push(format!("ID: {}", m.id()));
        lines.push(format!("Email: {}", m.email()));
        lines.push(String::new());
    }
    lines
}

fn catalog_view(library: &Library) -> Vec<String> {
    if library.is_empty() {
        return vec!["No library publications listed.".to_string()];
    }
    let mut lines = Vec::new();
    for &kind in PublicationType::ALL {
        lines.push(format!("== {} ==", shelf_noun(kind).to_uppercase()));
        lines.push(String::new());
        for (i, p) in library.shelf(kind).iter().enumerate() {
            lines.push(format!("#{}", i + 1));
            lines.push(format!("Title: {}", p.title()));
            lines.push(format!("Author: {}", p.author()));
            lines.push("Copies:".to_string());
            lines.push(format!("   {:<14}{}", "Checked Out?", "Borrower"));
            for row in copy_rows(p, library.members()) {
                lines.push(format!(
                    "{}. {:<14}{}",
                    row.number,
                    row.checked_out_label(),
                    row.borrower
                ));
            }
            for (label, value) in detail_lines(p.kind()) {
                lines.push(format!("{label}: {value}"));
            }
            lines.push(String::new());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_out_report_returns_to_menu_on_enter() {
        let mut app = AppState::default();
        app.open(super::super::MenuItem::CheckOut);
        assert!(!app.pick(0)); // Book
        assert!(!app.pick(0)); // first book, copy auto-selected
        assert!(app.pick(1)); // second member
        let report = app.selection().and_then(Selection::report).cloned().unwrap();
        assert!(report.succeeded());
        let _ = app.handle_input(InputAction::Enter);
        assert_eq!(app.scene, Scene::Menu);
        assert_eq!(app.status().map(|s| s.text.as_str()), Some("Publication checked out"));
    }

    #[test]
    fn invalid_jump_sets_error_status_and_keeps_step() {
        let mut app = AppState::default();
        app.open(super::super::MenuItem::CheckIn);
        let _ = app.handle_input(InputAction::Jump(7));
        assert!(app.status().is_some_and(|s| s.error));
        assert_eq!(app.selection().map(Selection::step), Some(&Step::ChooseType));
    }

    #[test]
    fn check_out_without_members_stops_before_member_step() {
        let mut lib = Library::default();
        lib.add_publication(
            Publication::book("Dune", "Herbert", 412, BookFormat::Paperback, 1).unwrap(),
        );
        let mut app = AppState::new(lib);
        app.open(super::super::MenuItem::CheckOut);
        assert!(!app.pick(0));
        assert!(!app.pick(0));
        assert_eq!(app.status().map(|s| s.text.as_str()), Some("No current members."));
        assert_eq!(
            app.selection().map(Selection::step),
            Some(&Step::ChoosePublication { kind: PublicationType::Book })
        );
        assert_eq!(app.library.shelf(PublicationType::Book)[0].checked_out_status(), vec![false]);
    }
}
