// SPDX-License-Identifier: MPL-2.0
//! Application root: boots the widgets on a page and drives them.
//!
//! The `App` owns the document, the timer queue and every widget. Hosts feed
//! it [`Gesture`]s and advance its virtual clock; everything else (timer
//! delivery, notification fan-in, follow-up messages, scroll re-evaluation)
//! happens inside [`App::update`]. Runtime faults from any widget are caught
//! there and surfaced as a generic error notification.

mod message;
pub mod router;
mod update;

pub use message::{Flags, Message};
pub use router::{Gesture, Key, Modifiers, Router};

use crate::config::Config;
use crate::diagnostics::{AppStateEvent, BufferCapacity, DiagnosticsCollector, DiagnosticsHandle};
use crate::dom::Document;
use crate::i18n::I18n;
use crate::preferences::{PreferenceStore, Storage, ThemeMode};
use crate::scheduler::Scheduler;
use crate::ui::articles::Articles;
use crate::ui::clock::Clock;
use crate::ui::forms::{Newsletter, SearchForms};
use crate::ui::navigation::Navigation;
use crate::ui::notifications::NotificationCenter;
use crate::ui::overlays::Overlays;
use crate::ui::slider::Slider;
use crate::ui::theming::ThemeSwitcher;
use crate::ui::ticker::Ticker;
use crate::ui::visibility::VisibilityGates;
use crate::ui::{Effects, Shell};
use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;

/// Everything a [`Shell`] borrows, kept apart from the widgets so both can
/// be borrowed mutably at once.
struct Runtime<D> {
    document: D,
    timers: Scheduler<Message>,
    preferences: PreferenceStore,
    i18n: I18n,
    diagnostics: DiagnosticsHandle,
    effects: Effects,
}

impl<D: Document> Runtime<D> {
    fn shell(&mut self) -> Shell<'_> {
        Shell::new(
            &mut self.document,
            &mut self.timers,
            &mut self.preferences,
            &self.i18n,
            &self.diagnostics,
            &mut self.effects,
        )
    }
}

/// Widgets mounted on the page. Optional ones need elements the page may
/// not carry.
#[derive(Debug)]
struct Widgets {
    notifications: NotificationCenter,
    theme: ThemeSwitcher,
    slider: Option<Slider>,
    ticker: Option<Ticker>,
    clock: Option<Clock>,
    gates: VisibilityGates,
    overlays: Overlays,
    newsletter: Option<Newsletter>,
    search: SearchForms,
    navigation: Navigation,
    articles: Articles,
}

impl Widgets {
    fn mount(doc: &dyn Document, config: &Config) -> Self {
        Self {
            notifications: NotificationCenter::new(),
            theme: ThemeSwitcher::mount(doc),
            slider: Slider::mount(doc, config.slide_interval()),
            ticker: Ticker::mount(doc),
            clock: Clock::mount(doc),
            gates: VisibilityGates::mount(doc),
            overlays: Overlays::mount(doc),
            newsletter: Newsletter::mount(doc),
            search: SearchForms::mount(doc),
            navigation: Navigation::mount(doc),
            articles: Articles::mount(doc),
        }
    }
}

/// Services the page runs with.
pub struct Bootstrap {
    pub config: Config,
    /// Locale override, as given by `--lang`.
    pub lang: Option<String>,
    /// Backing store of the theme preference cell.
    pub storage: Box<dyn Storage>,
    /// Wall-clock time at virtual time zero.
    pub epoch: DateTime<Local>,
    pub diagnostics_capacity: BufferCapacity,
}

impl Bootstrap {
    /// Defaults for `storage`, starting the clock now.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            config: Config::default(),
            lang: None,
            storage,
            epoch: Local::now(),
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}

/// Root application state bridging the page, its widgets and the shared
/// services (timers, preference cell, localization, diagnostics).
pub struct App<D: Document> {
    runtime: Runtime<D>,
    collector: DiagnosticsCollector,
    widgets: Widgets,
    router: Router,
}

impl<D: Document> fmt::Debug for App<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("now", &self.runtime.timers.now())
            .field("pending_timers", &self.runtime.timers.pending_count())
            .field("bindings", &self.router.len())
            .finish_non_exhaustive()
    }
}

impl<D: Document> App<D> {
    /// Mounts every widget on `document` and starts them.
    ///
    /// Widgets whose elements are missing stay inert; a fault while starting
    /// one is reported like any other runtime fault and does not stop the
    /// others.
    pub fn boot(document: D, bootstrap: Bootstrap) -> Self {
        let Bootstrap {
            config,
            lang,
            storage,
            epoch,
            diagnostics_capacity,
        } = bootstrap;

        let collector = DiagnosticsCollector::new(diagnostics_capacity);
        let diagnostics = collector.handle();
        let widgets = Widgets::mount(&document, &config);
        let router = Router::mount(&document);

        let mut app = Self {
            runtime: Runtime {
                document,
                timers: Scheduler::new(epoch),
                preferences: PreferenceStore::new(storage, diagnostics.clone()),
                i18n: I18n::new(lang, &config),
                diagnostics,
                effects: Effects::default(),
            },
            collector,
            widgets,
            router,
        };
        app.start();
        app
    }

    fn start(&mut self) {
        let mut theme = ThemeMode::default();
        self.guarded(|widgets, shell| {
            theme = widgets.theme.start(shell)?;
            Ok(())
        });
        self.guarded(|widgets, shell| widgets.gates.on_scroll(shell.document));
        self.guarded(|widgets, shell| match widgets.slider.as_mut() {
            Some(slider) => slider.start(shell),
            None => Ok(()),
        });
        self.guarded(|widgets, shell| match widgets.ticker.as_mut() {
            Some(ticker) => ticker.start(shell),
            None => Ok(()),
        });
        self.guarded(|widgets, shell| match widgets.clock.as_mut() {
            Some(clock) => clock.start(shell),
            None => Ok(()),
        });
        self.guarded(|widgets, shell| widgets.articles.start(shell));
        for message in self.flush_effects() {
            self.update(message);
        }

        self.runtime.diagnostics.log_state(AppStateEvent::Booted {
            locale: self.runtime.i18n.current_locale().to_string(),
            theme: theme.to_string(),
        });
        self.collector.process_pending();
    }

    /// Routes a host gesture through the binding table and handles every
    /// message it produces.
    pub fn dispatch(&mut self, gesture: Gesture) {
        if let Gesture::Resize { width } = gesture {
            self.runtime
                .diagnostics
                .log_state(AppStateEvent::ViewportResized { width });
        }
        let messages = self.router.route(&self.runtime.document, &gesture);
        for message in messages {
            self.update(message);
        }
    }

    /// Moves virtual time forward by `duration`, delivering every timer that
    /// falls due in order.
    pub fn advance(&mut self, duration: Duration) {
        let until = self.runtime.timers.now() + duration;
        while let Some(message) = self.runtime.timers.pop_due(until) {
            self.update(message);
        }
        self.runtime.timers.settle(until);
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.runtime.document
    }

    /// Host access to the page, e.g. to type into inputs or resize the
    /// viewport before dispatching the matching gesture.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.runtime.document
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.widgets.notifications
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.runtime.preferences.get_theme()
    }

    #[must_use]
    pub fn slider(&self) -> Option<&Slider> {
        self.widgets.slider.as_ref()
    }

    #[must_use]
    pub fn ticker(&self) -> Option<&Ticker> {
        self.widgets.ticker.as_ref()
    }

    #[must_use]
    pub fn overlays(&self) -> &Overlays {
        &self.widgets.overlays
    }

    #[must_use]
    pub fn newsletter(&self) -> Option<&Newsletter> {
        self.widgets.newsletter.as_ref()
    }

    #[must_use]
    pub fn gates(&self) -> &VisibilityGates {
        &self.widgets.gates
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.runtime.i18n
    }

    /// Elapsed virtual time since boot.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.runtime.timers.now()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.runtime.timers.pending_count()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.collector
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }
}
