// Ruleset Compare - Main Window
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Main window: selector strip above the table of rule rows.

use std::cell::{Cell, RefCell};

use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use gtk4::{gio, glib};
use libadwaita as adw;
use libadwaita::prelude::*;
use tracing::{error, info};

use super::{GtkBoard, RuleRowWidget};
use crate::client;
use crate::config::Settings;
use crate::controller::{ComparisonController, Selection};
use crate::models::{Comparisons, BASELINE_NAME};

glib::wrapper! {
    /// The main application window.
    pub struct MainWindow(ObjectSubclass<imp::MainWindow>)
        @extends adw::ApplicationWindow, gtk4::ApplicationWindow, gtk4::Window, gtk4::Widget,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl MainWindow {
    /// Create a new main window.
    pub fn new(app: &impl IsA<gtk4::Application>) -> Self {
        let settings = Settings::new();
        let window: Self = glib::Object::builder()
            .property("application", app)
            .property("title", "Ruleset Compare")
            .property("default-width", settings.window_width())
            .property("default-height", settings.window_height())
            .property("maximized", settings.is_maximized())
            .build();

        window.setup_ui();
        window.setup_actions();
        window.connect_close_request(|win| {
            let mut settings = Settings::new();
            if win.is_maximized() {
                settings.set_maximized(true);
            } else {
                settings.set_maximized(false);
                settings.set_window_size(win.default_width(), win.default_height());
            }
            glib::Propagation::Proceed
        });

        window.load_comparisons();
        window
    }

    /// Show a toast notification.
    pub fn show_toast(&self, message: &str) {
        if let Some(toast_overlay) = self.imp().toast_overlay.borrow().as_ref() {
            toast_overlay.add_toast(adw::Toast::new(message));
        }
    }

    /// Setup the main UI.
    fn setup_ui(&self) {
        let imp = self.imp();

        let toast_overlay = adw::ToastOverlay::new();
        imp.toast_overlay.replace(Some(toast_overlay.clone()));

        let content_box = gtk4::Box::new(gtk4::Orientation::Vertical, 0);

        let header = adw::HeaderBar::new();
        let title = adw::WindowTitle::new(&format!("{} Rules", BASELINE_NAME), "Loading comparisons…");
        header.set_title_widget(Some(&title));
        imp.content_title.replace(Some(title));

        let menu = gio::Menu::new();
        menu.append(Some("Preferences"), Some("app.preferences"));
        menu.append(Some("About Ruleset Compare"), Some("app.about"));
        let menu_button = gtk4::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu)
            .build();
        header.pack_end(&menu_button);
        content_box.append(&header);

        // Load failures are surfaced here.
        let banner = adw::Banner::builder()
            .button_label("Reload")
            .action_name("win.reload")
            .revealed(false)
            .build();
        content_box.append(&banner);
        imp.error_banner.replace(Some(banner));

        let selector_box = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Horizontal)
            .spacing(8)
            .halign(gtk4::Align::Center)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .margin_end(12)
            .build();
        selector_box.add_css_class("comparisons-list");
        let selector_scroll = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Automatic)
            .vscrollbar_policy(gtk4::PolicyType::Never)
            .child(&selector_box)
            .build();
        content_box.append(&selector_scroll);
        imp.selector_box.replace(Some(selector_box));

        let rule_list = gtk4::ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .css_classes(vec!["boxed-list".to_string()])
            .margin_top(12)
            .margin_bottom(24)
            .margin_start(24)
            .margin_end(24)
            .valign(gtk4::Align::Start)
            .build();
        imp.rule_list.replace(Some(rule_list.clone()));

        let placeholder = adw::StatusPage::builder()
            .icon_name("content-loading-symbolic")
            .title("Loading")
            .description("Fetching comparisons from the server")
            .vexpand(true)
            .build();
        imp.placeholder.replace(Some(placeholder.clone()));

        let stack = gtk4::Stack::builder()
            .transition_type(gtk4::StackTransitionType::Crossfade)
            .vexpand(true)
            .build();
        stack.add_named(&placeholder, Some("placeholder"));
        let scrolled = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .vscrollbar_policy(gtk4::PolicyType::Automatic)
            .child(&rule_list)
            .build();
        stack.add_named(&scrolled, Some("rules"));
        stack.set_visible_child_name("placeholder");
        content_box.append(&stack);
        imp.stack.replace(Some(stack));

        toast_overlay.set_child(Some(&content_box));
        self.set_content(Some(&toast_overlay));
    }

    /// Setup window actions.
    fn setup_actions(&self) {
        let reload = gio::ActionEntry::builder("reload")
            .activate(|window: &Self, _, _| {
                window.load_comparisons();
            })
            .build();

        self.add_action_entries([reload]);
    }

    /// Fetch comparisons without blocking the UI.
    ///
    /// Comparisons are held for the rest of the session once loaded, so this
    /// does nothing after a successful load.
    pub fn load_comparisons(&self) {
        let imp = self.imp();
        if imp.loaded.get() || imp.loading.get() {
            return;
        }
        imp.loading.set(true);
        if let Some(banner) = imp.error_banner.borrow().as_ref() {
            banner.set_revealed(false);
        }

        let settings = Settings::new();
        let endpoint = settings.endpoint();
        let timeout = settings.request_timeout();
        info!("Loading comparisons from {}", endpoint);

        let window = self.clone();
        glib::spawn_future_local(async move {
            let result = gio::spawn_blocking(move || {
                client::fetch_comparisons_blocking(&endpoint, timeout)
            })
            .await;

            window.imp().loading.set(false);
            match result {
                Ok(Ok(comparisons)) => window.install(comparisons),
                Ok(Err(e)) => window.show_error(&format!("Could not load comparisons: {:#}", e)),
                Err(_) => window.show_error("Loading comparisons failed unexpectedly"),
            }
        });
    }

    /// Whether comparisons have been installed for this session.
    pub fn is_loaded(&self) -> bool {
        self.imp().loaded.get()
    }

    /// Surface a load failure.
    fn show_error(&self, message: &str) {
        error!("{}", message);
        let imp = self.imp();
        if let Some(banner) = imp.error_banner.borrow().as_ref() {
            banner.set_title(message);
            banner.set_revealed(true);
        }
        if let Some(placeholder) = imp.placeholder.borrow().as_ref() {
            placeholder.set_icon_name(Some("network-error-symbolic"));
            placeholder.set_title("No Comparisons");
            placeholder.set_description(Some("The rule server could not be reached"));
        }
        self.set_subtitle("");
    }

    /// Build the rule rows from the baseline and start dispatching selector clicks.
    fn install(&self, comparisons: Comparisons) {
        let imp = self.imp();

        let Some(baseline) = comparisons.baseline() else {
            self.show_error(&format!("Server sent no {} rule-set", BASELINE_NAME));
            return;
        };

        let rows: Vec<RuleRowWidget> = baseline
            .rules
            .iter()
            .map(|(rule, permission)| RuleRowWidget::new(rule, *permission))
            .collect();

        let (Some(rule_list), Some(selector_box)) = (
            imp.rule_list.borrow().clone(),
            imp.selector_box.borrow().clone(),
        ) else {
            return;
        };
        for row in &rows {
            rule_list.append(row.widget());
        }
        let row_count = rows.len();

        let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel::<String>();
        let board = GtkBoard::new(rows, selector_box, sender);
        let mut controller = ComparisonController::new(comparisons, board);

        imp.loaded.set(true);
        if let Some(stack) = imp.stack.borrow().as_ref() {
            stack.set_visible_child_name("rules");
        }
        self.set_subtitle(&format!("{} rules", row_count));
        self.show_toast("Comparisons loaded");

        // Clicks are processed one at a time on the main loop.
        let window = self.downgrade();
        glib::spawn_future_local(async move {
            while let Some(name) = receiver.recv().await {
                let Some(window) = window.upgrade() else {
                    break;
                };
                controller.handle_selector(&name);
                window.show_selection(&controller);
            }
        });
    }

    fn show_selection(&self, controller: &ComparisonController<GtkBoard>) {
        let subtitle = match (controller.selection(), controller.summary()) {
            (Selection::Comparison(name), Some(summary)) => format!(
                "Compared with {}: {} of {} rules differ",
                name,
                summary.diverging,
                summary.total()
            ),
            _ => format!("{} rules", controller.board().row_count()),
        };
        self.set_subtitle(&subtitle);
    }

    fn set_subtitle(&self, subtitle: &str) {
        if let Some(title) = self.imp().content_title.borrow().as_ref() {
            title.set_subtitle(subtitle);
        }
    }
}

mod imp {
    use super::*;
    use libadwaita::subclass::prelude::*;

    #[derive(Default)]
    pub struct MainWindow {
        pub toast_overlay: RefCell<Option<adw::ToastOverlay>>,
        pub content_title: RefCell<Option<adw::WindowTitle>>,
        pub error_banner: RefCell<Option<adw::Banner>>,
        pub selector_box: RefCell<Option<gtk4::Box>>,
        pub rule_list: RefCell<Option<gtk4::ListBox>>,
        pub placeholder: RefCell<Option<adw::StatusPage>>,
        pub stack: RefCell<Option<gtk4::Stack>>,
        /// A fetch is in flight.
        pub loading: Cell<bool>,
        /// Comparisons have been installed; they stay for the session.
        pub loaded: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MainWindow {
        const NAME: &'static str = "RulesetCompareMainWindow";
        type Type = super::MainWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for MainWindow {}
    impl WidgetImpl for MainWindow {}
    impl WindowImpl for MainWindow {}
    impl ApplicationWindowImpl for MainWindow {}
    impl AdwApplicationWindowImpl for MainWindow {}
}
