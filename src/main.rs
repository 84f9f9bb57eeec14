// SPDX-License-Identifier: MPL-2.0
//! `news-portal` driver: boots the sample page and replays a gesture script.
//!
//! ```text
//! news-portal [--lang L] [--config-dir D] [--data-dir D] [--diagnostics FILE] [SCRIPT]
//! ```
//!
//! Script lines (blank lines and `#` comments are skipped):
//!
//! ```text
//! click #searchBtn        click .dot 2       key ctrl+k      key Escape
//! scroll 400              resize 1024        hide            show
//! wait 5000               type #searchModalInput budget      submit .search-modal-form
//! hover .slider-container leave .slider-container
//! ```

use news_portal::app::{App, Bootstrap, Flags, Gesture, Key, Modifiers};
use news_portal::config::{self, paths};
use news_portal::dom::{sample, Document, MemoryDocument, NodeId, Viewport};
use news_portal::preferences::{FileStorage, MemoryStorage, Storage};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        diagnostics: args.opt_value_from_str("--diagnostics").unwrap_or(None),
    };
    let script: Option<String> = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load settings, using defaults: {err}");
            config::Config::default()
        }
    };
    let storage: Box<dyn Storage> = match FileStorage::in_data_dir(None) {
        Some(storage) => Box::new(storage),
        None => Box::new(MemoryStorage::new()),
    };

    let mut bootstrap = Bootstrap::new(storage);
    bootstrap.config = config;
    bootstrap.lang = flags.lang;
    let mut app = App::boot(sample::news_page(), bootstrap);

    println!(
        "booted: locale={} theme={} slides={}",
        app.i18n().current_locale(),
        app.theme(),
        app.slider().map_or(0, |slider| slider.len())
    );

    let code = match script {
        Some(script) => run_script(&mut app, &script),
        None => ExitCode::SUCCESS,
    };

    if let Some(path) = flags.diagnostics {
        if let Err(err) = app.diagnostics().export_to_file(Path::new(&path)) {
            eprintln!("Failed to write diagnostics report {path}: {err}");
            return ExitCode::FAILURE;
        }
    }
    code
}

fn run_script(app: &mut App<MemoryDocument>, script: &str) -> ExitCode {
    let source = match fs::read_to_string(script) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read script {script}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut last_shown = None;
    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(err) = run_line(app, line) {
            eprintln!("line {}: {err}", number + 1);
            return ExitCode::FAILURE;
        }
        let shown = app.notifications().current().map(|n| n.id());
        if shown.is_some() && shown != last_shown {
            if let Some(notification) = app.notifications().current() {
                println!("[{}] {}", notification.kind(), notification.message());
            }
        }
        last_shown = shown;
    }
    ExitCode::SUCCESS
}

fn run_line(app: &mut App<MemoryDocument>, line: &str) -> Result<(), String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    match command {
        "click" => {
            let target = select(app.document(), &rest)?;
            app.dispatch(Gesture::Click { target });
        }
        "hover" | "leave" => {
            let target = select(app.document(), &rest)?;
            app.dispatch(if command == "hover" {
                Gesture::PointerEnter { target }
            } else {
                Gesture::PointerLeave { target }
            });
        }
        "submit" => {
            let form = select(app.document(), &rest)?;
            app.dispatch(Gesture::Submit { form });
        }
        "type" => {
            let (selector, text) = rest.split_first().ok_or("type needs a selector")?;
            let target = select(app.document(), &[*selector])?;
            app.document_mut()
                .set_value(target, &text.join(" "))
                .map_err(|err| err.to_string())?;
        }
        "key" => {
            let combo = rest.first().ok_or("key needs a key name")?;
            let (modifiers, key) = parse_combo(combo);
            let target = app.document().focused();
            app.dispatch(Gesture::KeyDown {
                key,
                modifiers,
                target,
            });
        }
        "scroll" => {
            let top = parse_number(&rest)?;
            app.document_mut().scroll_to(top);
            app.dispatch(Gesture::Scroll);
        }
        "resize" => {
            let width = parse_number(&rest)?;
            let height = app.document().viewport().height;
            app.document_mut().set_viewport(Viewport { width, height });
            app.dispatch(Gesture::Resize { width });
        }
        "hide" => app.dispatch(Gesture::VisibilityChange { hidden: true }),
        "show" => app.dispatch(Gesture::VisibilityChange { hidden: false }),
        "wait" => {
            let millis = parse_number(&rest)?;
            app.advance(Duration::from_millis(millis.max(0.0) as u64));
        }
        other => return Err(format!("unknown command `{other}`")),
    }
    Ok(())
}

/// Resolves `#id` or `.class [index]`.
fn select(doc: &dyn Document, args: &[&str]) -> Result<NodeId, String> {
    let selector = args.first().ok_or("missing selector")?;
    if let Some(id) = selector.strip_prefix('#') {
        return doc
            .element_by_id(id)
            .ok_or_else(|| format!("no element #{id}"));
    }
    if let Some(class) = selector.strip_prefix('.') {
        let index = match args.get(1) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("bad index `{raw}`"))?,
            None => 0,
        };
        return doc
            .elements_by_class(class)
            .get(index)
            .copied()
            .ok_or_else(|| format!("no element .{class} at {index}"));
    }
    Err(format!("unsupported selector `{selector}`"))
}

fn parse_combo(combo: &str) -> (Modifiers, Key) {
    let mut modifiers = Modifiers::default();
    let mut parts: Vec<&str> = combo.split('+').collect();
    let key = parts.pop().unwrap_or_default();
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            _ => {}
        }
    }
    (modifiers, Key::parse(key))
}

fn parse_number(args: &[&str]) -> Result<f64, String> {
    let raw = args.first().ok_or("missing number")?;
    raw.parse::<f64>().map_err(|_| format!("bad number `{raw}`"))
}
