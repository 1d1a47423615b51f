//! YATE application
//!
//! The egui window: menu bar, text area, status line. Menu clicks and
//! accelerators become [`Command`]s run by the [`FileController`].

use crate::command::{Command, EmojiMenu};
use crate::config::Config;
use crate::controller::{FileController, Outcome};
use crate::dialogs::{self, NativeDialogs};
use crate::document::Document;
use crate::shell::{window_title, Shell};
use egui::{Context, ViewportCommand};
use yatecore::storage::{load_emojis, StorageError};
use yatecore::theme::menu_bar;
use yatecore::widgets::{status_bar, status_text};
use yatecore::YateTheme;

/// Window-side state seen by the controller
pub struct EditorShell {
    pub document: Document,
    title: String,
    /// Set when the title must be pushed to the viewport
    title_changed: bool,
    status: String,
}

impl Default for EditorShell {
    fn default() -> Self {
        Self {
            document: Document::new(),
            title: window_title(None),
            title_changed: false,
            status: status_text(0, false),
        }
    }
}

impl EditorShell {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Recompute the status line from the buffer
    pub fn refresh_status(&mut self) {
        let (count, modified) = (self.document.char_count(), self.document.is_modified());
        self.set_status(count, modified);
    }

    fn take_title_change(&mut self) -> Option<String> {
        if self.title_changed {
            self.title_changed = false;
            Some(self.title.clone())
        } else {
            None
        }
    }
}

impl Shell for EditorShell {
    fn text(&self) -> String {
        self.document.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.document.set_text(text);
    }

    fn is_modified(&self) -> bool {
        self.document.is_modified()
    }

    fn reset_modified(&mut self) {
        self.document.reset_modified();
    }

    fn confirm_discard(&mut self, message: &str) -> bool {
        dialogs::confirm("Changes unsaved", message)
    }

    fn set_title(&mut self, title: String) {
        if title != self.title {
            self.title = title;
            self.title_changed = true;
        }
    }

    fn set_status(&mut self, char_count: usize, modified: bool) {
        self.status = status_text(char_count, modified);
    }

    fn insert_at_caret(&mut self, text: &str) {
        self.document.insert_at_caret(text);
    }

    fn show_error(&mut self, message: &str) {
        dialogs::error("Oops!", message);
    }
}

/// Application state
pub struct YateApp {
    shell: EditorShell,
    controller: FileController<NativeDialogs>,
    theme: YateTheme,
    show_about: bool,
    /// Set once the user agreed to close; lets the next close request through
    close_confirmed: bool,
}

impl YateApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let emojis = match load_emojis(&config.emojis_path()) {
            Ok(list) => list,
            Err(StorageError::NotFound(p)) => {
                tracing::warn!("emoji list {} not found, menu will be empty", p.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("could not read emoji list: {}", e);
                Vec::new()
            }
        };
        let controller = FileController::new(
            NativeDialogs,
            config.metadata_path(),
            EmojiMenu::from_emojis(emojis),
        );

        let mut app = Self {
            shell: EditorShell::default(),
            controller,
            theme: YateTheme::default(),
            show_about: false,
            close_confirmed: false,
        };

        if let Some(path) = config.initial_file {
            if let Err(e) = app.controller.open_path(path, &mut app.shell) {
                tracing::error!("{}", e);
                app.shell.show_error(&e.to_string());
            }
        }
        app
    }

    fn run(&mut self, command: Command, ctx: &Context) {
        if self.controller.dispatch(command, &mut self.shell) == Outcome::Quit {
            self.close_confirmed = true;
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    // ---------------------------------------------------------------
    // Keyboard handling
    // ---------------------------------------------------------------

    /// Pull accelerator presses out of the input queue so the text area
    /// never sees them.
    fn take_shortcuts(&mut self, ctx: &Context) -> Vec<Command> {
        let mut commands = Vec::new();
        ctx.input_mut(|i| {
            i.events.retain(|e| match e {
                egui::Event::Key { key, pressed: true, modifiers, .. } => {
                    match Command::from_key(*key, *modifiers) {
                        Some(cmd) => {
                            commands.push(cmd);
                            false
                        }
                        None => true,
                    }
                }
                egui::Event::Key { key, modifiers, .. } => Command::from_key(*key, *modifiers).is_none(),
                _ => true,
            });
        });
        commands
    }

    // ---------------------------------------------------------------
    // UI rendering
    // ---------------------------------------------------------------

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) -> Option<Command> {
        let mut chosen = None;
        let emojis = self.controller.emojis();
        menu_bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                for command in Command::FILE_MENU {
                    if ui.button(menu_label(command)).clicked() {
                        chosen = Some(command);
                        ui.close_menu();
                    }
                }
                ui.separator();
                ui.menu_button("Insert emoji", |ui| {
                    if emojis.is_empty() {
                        ui.label("no emojis");
                    }
                    for (index, label) in emojis.labels() {
                        if ui.button(label).clicked() {
                            chosen = Some(Command::InsertEmoji(index));
                            ui.close_menu();
                        }
                    }
                });
                ui.separator();
                if ui.button(menu_label(Command::Quit)).clicked() {
                    chosen = Some(Command::Quit);
                    ui.close_menu();
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("About YATE").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
        chosen
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut self.shell.document.text)
                    .font(self.theme.editor_font())
                    .desired_width(available.x)
                    .desired_rows((available.y / 20.0).max(4.0) as usize)
                    .frame(false)
                    .show(ui);

                if output.response.changed() {
                    self.shell.document.mark_modified();
                }
                if let Some(range) = output.cursor_range {
                    self.shell.document.set_caret(range.primary.ccursor.index);
                }
            });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about YATE")
            .collapsible(false)
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("YATE");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("yet another text editor");
                });
                ui.add_space(8.0);
                ui.separator();
                for command in Command::FILE_MENU.into_iter().chain([Command::Quit]) {
                    ui.label(menu_label(command));
                }
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

/// Menu text with the accelerator right after the label
fn menu_label(command: Command) -> String {
    match command.accelerator() {
        Some(accel) => format!("{:<10} {}", command.label(), accel),
        None => command.label().to_string(),
    }
}

impl eframe::App for YateApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for command in self.take_shortcuts(ctx) {
            self.run(command, ctx);
        }

        let mut chosen = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            chosen = self.render_menu_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, self.shell.status());
        });

        egui::CentralPanel::default()
            .frame(self.theme.editor_frame())
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if let Some(command) = chosen {
            self.run(command, ctx);
        }

        if self.show_about {
            self.render_about(ctx);
        }

        self.shell.refresh_status();
        if let Some(title) = self.shell.take_title_change() {
            ctx.send_viewport_cmd(ViewportCommand::Title(title));
        }

        // Window close button goes through the same gate as Quit
        if ctx.input(|i| i.viewport().close_requested()) && !self.close_confirmed {
            if self.controller.quit(&mut self.shell) == Outcome::Quit {
                self.close_confirmed = true;
            } else {
                ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_title_change_is_reported_once() {
        let mut shell = EditorShell::default();
        assert_eq!(shell.title(), "YATE - Untitled");
        assert_eq!(shell.take_title_change(), None);

        shell.set_title("YATE - a.txt".into());
        assert_eq!(shell.take_title_change().as_deref(), Some("YATE - a.txt"));
        assert_eq!(shell.take_title_change(), None);

        shell.set_title("YATE - a.txt".into());
        assert_eq!(shell.take_title_change(), None);
    }

    #[test]
    fn test_shell_status_follows_buffer() {
        let mut shell = EditorShell::default();
        shell.set_text("abc".into());
        shell.refresh_status();
        assert_eq!(shell.status(), "3 characters");

        shell.insert_at_caret("d");
        shell.refresh_status();
        assert_eq!(shell.status(), "4 characters  |  modified");
        assert_eq!(shell.text(), "abcd");

        shell.reset_modified();
        assert!(!shell.is_modified());
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(menu_label(Command::Save), "Save       Ctrl+S");
        assert_eq!(menu_label(Command::InsertEmoji(0)), "Insert emoji");
    }
}
