#![cfg(feature = "egui")]

use eframe::egui::{self, Color32, RichText, Sense};

use super::intent::Intent;
use super::state::Explorer;

/// A user action collected while drawing and applied once the frame's
/// closures have released their borrows of the explorer.
#[derive(Clone, Debug, PartialEq)]
enum UiAction {
    Search(String),
    EditableOnly(bool),
    Intent(Intent),
    Reset,
    Toggle(String),
    Category(String),
    Bucket(String),
    Select(String),
}

/// Interactive egui front end over an [`Explorer`].
#[derive(Clone)]
pub struct ExplorerApp {
    pub explorer: Explorer,
    search_text: String,
    editable_only: bool,
}

impl ExplorerApp {
    pub fn new(explorer: Explorer) -> Self {
        let search_text = explorer.criteria().search_text.clone();
        let editable_only = explorer.criteria().editable_only;
        Self {
            explorer,
            search_text,
            editable_only,
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Search(text) => self.explorer.set_search_text(text),
            UiAction::EditableOnly(flag) => self.explorer.set_editable_only(flag),
            UiAction::Intent(intent) => self.explorer.apply_intent(intent),
            UiAction::Reset => {
                self.explorer.reset_filters();
                self.search_text.clear();
                self.editable_only = false;
            }
            UiAction::Toggle(name) => {
                self.explorer.toggle_category_node(&name);
            }
            UiAction::Category(path) => self.explorer.select_category(&path),
            UiAction::Bucket(name) => self.explorer.select_bucket(&name),
            UiAction::Select(id) => {
                self.explorer.select_parameter(&id);
            }
        }
    }
}

fn show_toolbar(app: &mut ExplorerApp, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    ui.heading("Guided Parameter Explorer");
    ui.horizontal(|ui| {
        if ui.button("⚡ Performance").clicked() {
            actions.push(UiAction::Intent(Intent::Performance));
        }
        if ui.button("🔋 Power").clicked() {
            actions.push(UiAction::Intent(Intent::Power));
        }
        if ui.button("♻ Reset").clicked() {
            actions.push(UiAction::Reset);
        }
    });
    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text).hint_text("Search parameters..."),
        );
        if resp.changed() {
            actions.push(UiAction::Search(app.search_text.clone()));
        }
        if ui.checkbox(&mut app.editable_only, "Editable Only").changed() {
            actions.push(UiAction::EditableOnly(app.editable_only));
        }
    });
    ui.horizontal_wrapped(|ui| {
        let crumbs = app.explorer.breadcrumb();
        for (i, crumb) in crumbs.iter().enumerate() {
            ui.label(RichText::new(crumb).small());
            if i + 1 < crumbs.len() {
                ui.label(RichText::new("›").small());
            }
        }
    });
}

fn show_tree(app: &ExplorerApp, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    ui.label(RichText::new("📂 Categories").strong());
    for cat in app.explorer.categories() {
        let marker = if cat.expanded { "▼" } else { "▶" };
        let node = ui.add(
            egui::Label::new(RichText::new(format!("{marker} {}", cat.name)).strong())
                .sense(Sense::click()),
        );
        if node.clicked() {
            actions.push(UiAction::Toggle(cat.name.clone()));
        }
        if cat.expanded {
            ui.indent(&cat.name, |ui| {
                for sub in &cat.children {
                    if ui.link(&sub.name).clicked() {
                        actions.push(UiAction::Category(format!("{}/{}", cat.name, sub.name)));
                    }
                }
            });
        }
    }
}

fn show_parameters(app: &ExplorerApp, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    let ex = &app.explorer;
    ui.label(RichText::new(format!("🧩 Parameters ({})", ex.filtered_params().len())).strong());
    ui.separator();
    if ex.show_buckets() {
        ui.label(format!(
            "Too many results (more than {}). Refine further:",
            ex.bucket_threshold()
        ));
        egui::ScrollArea::vertical().id_salt("buckets").show(ui, |ui| {
            for b in ex.buckets() {
                if ui.button(format!("{} ({})", b.name, b.count)).clicked() {
                    actions.push(UiAction::Bucket(b.name.clone()));
                }
            }
        });
        return;
    }
    egui::ScrollArea::vertical().id_salt("rows").show(ui, |ui| {
        for p in ex.filtered_params() {
            let mut text = RichText::new(&p.name);
            if !p.editable {
                text = text.color(Color32::GRAY);
            }
            let selected = ex.selected_parameter().is_some_and(|s| s.id == p.id);
            ui.horizontal(|ui| {
                let resp = ui.selectable_label(selected, text).on_hover_text(&p.description);
                if resp.clicked() {
                    actions.push(UiAction::Select(p.id.clone()));
                }
                if !p.editable {
                    ui.label("🔒");
                }
            });
        }
    });
}

fn show_context(app: &ExplorerApp, ui: &mut egui::Ui) {
    ui.label(RichText::new("📖 Context").strong());
    ui.separator();
    match app.explorer.selected_parameter() {
        Some(p) => {
            ui.heading(&p.name);
            ui.label(&p.description);
            ui.label(format!("Category: {}", p.category));
            ui.label(format!("Editable: {}", p.editable));
            ui.label(format!("Value: {}", p.value));
        }
        None => {
            ui.label("Select a parameter to view help.");
        }
    }
}

/// Draw one frame and apply the actions it produced.
pub fn update(app: &mut ExplorerApp, ctx: &egui::Context) {
    let mut actions = Vec::new();
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        show_toolbar(app, ui, &mut actions);
    });
    egui::SidePanel::left("tree")
        .default_width(250.0)
        .show(ctx, |ui| show_tree(app, ui, &mut actions));
    egui::SidePanel::right("context")
        .default_width(300.0)
        .show(ctx, |ui| show_context(app, ui));
    egui::CentralPanel::default().show(ctx, |ui| show_parameters(app, ui, &mut actions));
    for action in actions {
        app.apply(action);
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        update(self, ctx);
    }
}
