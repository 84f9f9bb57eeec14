// SPDX-License-Identifier: MPL-2.0
//! Newsletter and search forms.
//!
//! Neither form talks to a backend. The newsletter simulates a request with
//! two timers; the search forms only echo the query back as a notification.

use crate::config::{NEWSLETTER_RESET_DELAY_MS, NEWSLETTER_SUBMIT_DELAY_MS};
use crate::diagnostics::UserAction;
use crate::dom::{contract as c, Document, NodeId};
use crate::error::Result;
use crate::scheduler::TimerHandle;
use crate::ui::design_tokens::palette;
use crate::ui::notifications::Kind;
use crate::ui::overlays;
use crate::ui::Shell;
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// Whitespace as browsers define `\s` in a pattern: the ASCII controls,
/// no-break and Unicode space separators, line/paragraph separators and the
/// byte order mark. NEL (U+0085) is not part of it.
const FORM_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with the whitespace class above.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email regex should compile")
});

/// Accepts `local@domain.tld`: no whitespace, a single `@`, and a dot with
/// text on both sides somewhere after it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ==========================================================================
// Newsletter
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterMessage {
    Submit,
    /// Simulated request finished.
    Completed,
    /// Success feedback expired.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Subscribed,
}

#[derive(Debug)]
pub struct Newsletter {
    input: NodeId,
    button: NodeId,
    original_label: String,
    state: SubmitState,
    timer: Option<TimerHandle>,
}

impl Newsletter {
    /// Needs the form with both its input and its button.
    pub fn mount(doc: &dyn Document) -> Option<Self> {
        let form = doc.elements_by_class(c::NEWSLETTER_FORM).first().copied()?;
        let input = doc
            .descendants_by_class(form, c::NEWSLETTER_INPUT)
            .first()
            .copied()?;
        let button = doc
            .descendants_by_class(form, c::NEWSLETTER_BUTTON)
            .first()
            .copied()?;
        Some(Self {
            input,
            button,
            original_label: doc.text(button).unwrap_or_default(),
            state: SubmitState::Idle,
            timer: None,
        })
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: NewsletterMessage) -> Result<()> {
        match message {
            NewsletterMessage::Submit => self.submit(shell),
            NewsletterMessage::Completed => {
                self.state = SubmitState::Subscribed;
                let label = shell.tr("newsletter-button-subscribed");
                let doc = &mut *shell.document;
                doc.set_text(self.button, &label)?;
                doc.set_style(self.button, "background-color", palette::SUCCESS_600)?;
                doc.set_value(self.input, "")?;

                let text = shell.tr("notification-newsletter-subscribed");
                shell.notify(Kind::Success, text);
                shell.restart_timeout(
                    &mut self.timer,
                    Duration::from_millis(NEWSLETTER_RESET_DELAY_MS),
                    NewsletterMessage::Reset,
                );
                Ok(())
            }
            NewsletterMessage::Reset => {
                self.state = SubmitState::Idle;
                self.timer = None;
                let doc = &mut *shell.document;
                doc.set_text(self.button, &self.original_label)?;
                doc.set_style(self.button, "background-color", "")?;
                doc.set_disabled(self.button, false)
            }
        }
    }

    fn submit(&mut self, shell: &mut Shell<'_>) -> Result<()> {
        if self.state != SubmitState::Idle {
            return Ok(());
        }
        let email = shell.document.value(self.input).unwrap_or_default();
        if email.is_empty() {
            return Ok(());
        }
        if !is_valid_email(&email) {
            let text = shell.tr("notification-newsletter-invalid-email");
            shell.notify(Kind::Error, text);
            return Ok(());
        }

        shell.diagnostics.log_action(UserAction::SubmitNewsletter);
        self.state = SubmitState::Submitting;
        let label = shell.tr("newsletter-button-subscribing");
        shell.document.set_text(self.button, &label)?;
        shell.document.set_disabled(self.button, true)?;
        shell.restart_timeout(
            &mut self.timer,
            Duration::from_millis(NEWSLETTER_SUBMIT_DELAY_MS),
            NewsletterMessage::Completed,
        );
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    #[must_use]
    pub fn input(&self) -> NodeId {
        self.input
    }

    #[must_use]
    pub fn button(&self) -> NodeId {
        self.button
    }
}

// ==========================================================================
// Search
// ==========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// A search form was submitted.
    Submit(NodeId),
}

#[derive(Debug, Clone, Copy)]
struct SearchForm {
    form: NodeId,
    input: Option<NodeId>,
}

/// The sidebar search form and the overlay's form.
#[derive(Debug, Default)]
pub struct SearchForms {
    forms: Vec<SearchForm>,
}

impl SearchForms {
    pub fn mount(doc: &dyn Document) -> Self {
        let forms = [c::SEARCH_FORM, c::SEARCH_OVERLAY_FORM]
            .iter()
            .flat_map(|class| doc.elements_by_class(class))
            .map(|form| SearchForm {
                form,
                input: doc
                    .descendants_by_tag(form, "input")
                    .into_iter()
                    .find(|input| doc.attribute(*input, "type").as_deref() == Some("text")),
            })
            .collect();
        Self { forms }
    }

    pub fn update(&mut self, shell: &mut Shell<'_>, message: SearchMessage) -> Result<()> {
        let SearchMessage::Submit(form) = message;
        let Some(input) = self
            .forms
            .iter()
            .find(|entry| entry.form == form)
            .and_then(|entry| entry.input)
        else {
            return Ok(());
        };

        let raw = shell.document.value(input).unwrap_or_default();
        let query = raw.trim();
        if query.is_empty() {
            return Ok(());
        }

        shell.diagnostics.log_action(UserAction::SubmitSearch);
        let text = shell.tr_with_args("notification-search-query", &[("query", query)]);
        shell.notify(Kind::Info, text);
        shell.send(overlays::Message::CloseSearch);
        shell.document.set_value(input, "")
    }

    pub fn forms(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.forms.iter().map(|entry| entry.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::test_utils::Harness;

    fn run_timers(h: &mut Harness, newsletter: &mut Newsletter, delay: Duration) {
        for message in h.fire(delay) {
            if let app::Message::Newsletter(message) = message {
                newsletter.update(&mut h.shell(), message).unwrap();
            }
        }
    }

    #[test]
    fn email_validation() {
        for valid in ["a@b.com", "first.last@news.example.org", "x@y.z"] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in [
            "not-an-email",
            "@b.com",
            "a@b",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@@b.com",
            "a@b@c.com",
            "",
        ] {
            assert!(!is_valid_email(invalid), "{invalid}");
        }
    }

    #[test]
    fn email_whitespace_follows_browser_class() {
        for rejected in [
            "a@b.com\u{FEFF}",
            "a\u{A0}b@c.com",
            "a@b\u{3000}.com",
            "a@b.c\u{2028}om",
            "a\tb@c.com",
        ] {
            assert!(!is_valid_email(rejected), "{rejected:?}");
        }
        for accepted in ["a\u{85}b@c.com", "ज़@उदा.भारत", "a@b.c.d"] {
            assert!(is_valid_email(accepted), "{accepted:?}");
        }
    }

    #[test]
    fn invalid_email_keeps_form_untouched() {
        let mut h = Harness::new();
        let mut newsletter = Newsletter::mount(&h.doc).unwrap();
        h.doc.set_value(newsletter.input, "not-an-email").unwrap();

        newsletter
            .update(&mut h.shell(), NewsletterMessage::Submit)
            .unwrap();

        assert_eq!(h.take_notices(), vec!["Please enter a valid email address"]);
        assert_eq!(h.effects.notices.len(), 0);
        assert_eq!(h.doc.value(newsletter.input).as_deref(), Some("not-an-email"));
        assert!(!h.doc.is_disabled(newsletter.button));
        assert_eq!(newsletter.state(), SubmitState::Idle);
    }

    #[test]
    fn empty_email_is_ignored() {
        let mut h = Harness::new();
        let mut newsletter = Newsletter::mount(&h.doc).unwrap();

        newsletter
            .update(&mut h.shell(), NewsletterMessage::Submit)
            .unwrap();
        assert!(h.take_notices().is_empty());
        assert_eq!(h.timers.pending_count(), 0);
    }

    #[test]
    fn valid_email_runs_full_feedback_cycle() {
        let mut h = Harness::new();
        let mut newsletter = Newsletter::mount(&h.doc).unwrap();
        let button = newsletter.button;
        h.doc.set_value(newsletter.input, "a@b.com").unwrap();

        newsletter
            .update(&mut h.shell(), NewsletterMessage::Submit)
            .unwrap();
        assert_eq!(h.doc.text(button).as_deref(), Some("Subscribing…"));
        assert!(h.doc.is_disabled(button));

        // Double submit while in flight is ignored
        newsletter
            .update(&mut h.shell(), NewsletterMessage::Submit)
            .unwrap();
        assert_eq!(h.timers.pending_count(), 1);

        run_timers(&mut h, &mut newsletter, Duration::from_millis(1000));
        assert_eq!(newsletter.state(), SubmitState::Subscribed);
        assert_eq!(h.doc.text(button).as_deref(), Some("Subscribed!"));
        assert_eq!(
            h.doc.style(button, "background-color").as_deref(),
            Some(palette::SUCCESS_600)
        );
        assert_eq!(h.doc.value(newsletter.input).as_deref(), Some(""));
        assert_eq!(
            h.take_notices(),
            vec!["Successfully subscribed to newsletter!"]
        );

        run_timers(&mut h, &mut newsletter, Duration::from_millis(2000));
        assert_eq!(newsletter.state(), SubmitState::Idle);
        assert_eq!(h.doc.text(button).as_deref(), Some("Subscribe"));
        assert_eq!(h.doc.style(button, "background-color"), None);
        assert!(!h.doc.is_disabled(button));
    }

    #[test]
    fn search_submission_notifies_and_clears() {
        let mut h = Harness::new();
        let mut search = SearchForms::mount(&h.doc);
        assert_eq!(search.forms().count(), 2);
        let form = h.doc.elements_by_class(c::SEARCH_FORM)[0];
        let input = h.doc.descendants_by_tag(form, "input")[0];
        h.doc.set_value(input, "  election  ").unwrap();

        search
            .update(&mut h.shell(), SearchMessage::Submit(form))
            .unwrap();

        assert_eq!(h.take_notices(), vec!["Searching for: \"election\""]);
        assert_eq!(h.doc.value(input).as_deref(), Some(""));
        assert_eq!(
            h.effects.follow_ups,
            vec![app::Message::Overlay(overlays::Message::CloseSearch)]
        );
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut h = Harness::new();
        let mut search = SearchForms::mount(&h.doc);
        let form = h.doc.elements_by_class(c::SEARCH_OVERLAY_FORM)[0];
        let input = h.doc.element_by_id(c::SEARCH_INPUT).unwrap();
        h.doc.set_value(input, "   ").unwrap();

        search
            .update(&mut h.shell(), SearchMessage::Submit(form))
            .unwrap();
        assert!(h.take_notices().is_empty());
        assert!(h.effects.follow_ups.is_empty());
        assert_eq!(h.doc.value(input).as_deref(), Some("   "));
    }
}
