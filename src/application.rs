// Ruleset Compare - Application
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Main application struct and lifecycle management.

use std::cell::RefCell;

use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;
use libadwaita::prelude::*;
use tracing::info;

use crate::config::Settings;
use crate::stylesheet::stylesheet;
use crate::ui::MainWindow;

glib::wrapper! {
    /// The main application object.
    pub struct Application(ObjectSubclass<imp::Application>)
        @extends adw::Application, gtk4::Application, gio::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl Application {
    /// Create a new application instance.
    pub fn new(app_id: &str) -> Self {
        glib::Object::builder()
            .property("application-id", app_id)
            .property("flags", gio::ApplicationFlags::FLAGS_NONE)
            .build()
    }

    /// Setup application actions.
    fn setup_actions(&self) {
        let quit_action = gio::ActionEntry::builder("quit")
            .activate(|app: &Self, _, _| {
                app.quit();
            })
            .build();

        let about_action = gio::ActionEntry::builder("about")
            .activate(|app: &Self, _, _| {
                app.show_about_dialog();
            })
            .build();

        let preferences_action = gio::ActionEntry::builder("preferences")
            .activate(|app: &Self, _, _| {
                app.show_preferences_dialog();
            })
            .build();

        self.add_action_entries([quit_action, about_action, preferences_action]);
    }

    /// Show preferences dialog with theme and server settings.
    fn show_preferences_dialog(&self) {
        let dialog = adw::PreferencesDialog::builder()
            .title("Preferences")
            .build();

        let page = adw::PreferencesPage::new();

        let appearance_group = adw::PreferencesGroup::builder()
            .title("Appearance")
            .build();

        let theme_row = adw::ComboRow::builder()
            .title("Theme")
            .subtitle("Choose the application color scheme")
            .model(&gtk4::StringList::new(&["System", "Light", "Dark"]))
            .build();

        let current = match self.imp().settings.borrow().theme() {
            "light" => 1,
            "dark" => 2,
            _ => 0,
        };
        theme_row.set_selected(current);

        let app = self.clone();
        theme_row.connect_selected_notify(move |row| {
            let theme = match row.selected() {
                1 => "light",
                2 => "dark",
                _ => "system",
            };
            app.set_theme(theme);
        });

        appearance_group.add(&theme_row);
        page.add(&appearance_group);

        let server_group = adw::PreferencesGroup::builder()
            .title("Server")
            .description("Comparisons are fetched once when the window opens")
            .build();

        let endpoint_row = adw::EntryRow::builder()
            .title("Endpoint")
            .show_apply_button(true)
            .build();
        endpoint_row.set_text(self.imp().settings.borrow().configured_endpoint());

        let app = self.clone();
        endpoint_row.connect_apply(move |row| {
            let endpoint = row.text().to_string();
            info!("Endpoint changed to {}", endpoint);
            app.imp().settings.borrow_mut().set_endpoint(&endpoint);
            if let Some(window) = app.imp().window.get() {
                if window.is_loaded() {
                    window.show_toast("New endpoint takes effect on next launch");
                } else {
                    window.load_comparisons();
                }
            }
        });

        server_group.add(&endpoint_row);
        page.add(&server_group);

        dialog.add(&page);

        if let Some(window) = self.active_window() {
            dialog.present(Some(&window));
        }
    }

    /// Set and apply the theme.
    pub fn set_theme(&self, theme: &str) {
        self.imp().settings.borrow_mut().set_theme(theme);
        self.apply_theme(theme);
    }

    /// Apply the theme to the application.
    fn apply_theme(&self, theme: &str) {
        let style_manager = adw::StyleManager::default();
        match theme {
            "light" => style_manager.set_color_scheme(adw::ColorScheme::ForceLight),
            "dark" => style_manager.set_color_scheme(adw::ColorScheme::ForceDark),
            _ => style_manager.set_color_scheme(adw::ColorScheme::Default),
        }
    }

    /// Setup keyboard shortcuts.
    fn setup_shortcuts(&self) {
        self.set_accels_for_action("app.quit", &["<Control>q"]);
        self.set_accels_for_action("win.reload", &["<Control>r", "F5"]);
    }

    /// Show the about dialog.
    fn show_about_dialog(&self) {
        let dialog = adw::AboutDialog::builder()
            .application_name("Ruleset Compare")
            .application_icon("view-dual-symbolic")
            .developer_name("Christos A. Daggas")
            .version(env!("CARGO_PKG_VERSION"))
            .license_type(gtk4::License::MitX11)
            .copyright("© 2026 Christos A. Daggas")
            .developers(vec!["Christos A. Daggas".to_string()])
            .comments("Compare the weekly rule-set against other rule-sets")
            .build();

        if let Some(window) = self.active_window() {
            dialog.present(Some(&window));
        }
    }

    /// Load the row and selector styles.
    fn load_css(&self) {
        if let Some(display) = gtk4::gdk::Display::default() {
            let provider = gtk4::CssProvider::new();
            provider.load_from_string(&stylesheet());
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }
}

mod imp {
    use super::*;
    use std::cell::OnceCell;
    use libadwaita::subclass::prelude::*;

    #[derive(Default)]
    pub struct Application {
        pub window: OnceCell<MainWindow>,
        pub settings: RefCell<Settings>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Application {
        const NAME: &'static str = "RulesetCompareApplication";
        type Type = super::Application;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for Application {}

    impl ApplicationImpl for Application {
        fn activate(&self) {
            let app = self.obj();

            app.load_css();

            let theme = self.settings.borrow().theme().to_string();
            app.apply_theme(&theme);

            app.setup_actions();
            app.setup_shortcuts();

            let window = self.window.get_or_init(|| MainWindow::new(&*app));
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();
            info!("Application starting up");
        }
    }

    impl GtkApplicationImpl for Application {}
    impl AdwApplicationImpl for Application {}
}
