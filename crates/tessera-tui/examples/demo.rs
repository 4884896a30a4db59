//! Demo form showcasing tessera-tui widgets
//!
//! Run with: cargo run -p tessera-tui --example demo
//!
//! Tab / Shift+Tab move focus, Ctrl-C or Ctrl-Q quits. Set `TESSERA_THEME`
//! to a theme file to restyle the demo. Logs go to `tessera-demo.log` in the
//! system temp directory.

use std::env;
use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tessera_tui::widget::builtin::{
    Button, EchoMode, Entry, Label, LinearBox, List, Progress, StatusBar, TextEdit,
};
use tessera_tui::{
    shared, Event, FocusController, Painter, SimpleFocusChain, SizePolicy, Terminal, Theme,
    Widget, WidgetHandle,
};
use tracing::info;

fn init_logging() -> Result<()> {
    let path = env::temp_dir().join("tessera-demo.log");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    let default_directive = "tessera_tui=debug,demo=info".to_string();
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("tessera_tui") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let theme = Theme::from_env().context("loading theme")?;

    let status = shared(StatusBar::new("Tab to move, Ctrl-Q to quit"));
    status.borrow_mut().set_permanent_text("tessera");
    let progress = shared(Progress::new(5));

    let name = shared(Entry::new());
    let secret = shared(Entry::new());
    secret.borrow_mut().set_echo_mode(EchoMode::Password);
    let notes = shared(TextEdit::new());
    notes.borrow_mut().set_word_wrap(true);
    let fruits = shared(List::with_items(["apple", "banana", "cherry", "durian"]));
    let submit = shared(Button::new("Submit"));

    {
        let status = status.clone();
        name.borrow_mut()
            .on_submit(move |text| status.borrow_mut().set_text(format!("hello, {text}")));
    }
    {
        let status = status.clone();
        fruits.borrow_mut().on_item_activated(move |_, item| {
            status.borrow_mut().set_text(format!("picked {item}"));
        });
    }
    {
        let status = status.clone();
        let progress = progress.clone();
        let name = name.clone();
        submit.borrow_mut().on_activated(move || {
            let mut progress = progress.borrow_mut();
            let next = progress.current() + 1;
            progress.set_current(next);
            info!(step = next, "submitted");
            status
                .borrow_mut()
                .set_text(format!("submitted {} ({next})", name.borrow().text()));
        });
    }

    let mut fields = LinearBox::horizontal();
    fields.append(LinearBox::vertical().with(Label::new("name")).with(name.clone()));
    fields.append(LinearBox::vertical().with(Label::new("secret")).with(secret.clone()));

    let mut notes_box = LinearBox::vertical().with(notes.clone()).bordered();
    notes_box.set_title(Some("notes"));
    let mut fruits_box = LinearBox::vertical().with(fruits.clone()).bordered();
    fruits_box.set_title(Some("fruit"));
    fruits_box.set_size_policy(SizePolicy::Preferred, SizePolicy::Expanding);

    let mut root = LinearBox::vertical()
        .with(fields)
        .with(LinearBox::horizontal().with(notes_box).with(fruits_box))
        .with(LinearBox::horizontal().with(submit.clone()).with(progress.clone()))
        .with(status.clone())
        .bordered();
    root.set_title(Some("tessera demo"));

    let mut chain = SimpleFocusChain::new();
    chain.set(vec![
        name.clone() as WidgetHandle,
        secret.clone() as WidgetHandle,
        notes.clone() as WidgetHandle,
        fruits.clone() as WidgetHandle,
        submit.clone() as WidgetHandle,
    ]);
    let mut focus = FocusController::new();
    focus.set_chain(chain);
    focus.focus_default();

    let mut terminal = Terminal::new()?;
    let _guard = terminal.enter_raw_mode()?;
    info!("demo started");

    loop {
        Painter::new(&mut terminal, &theme).repaint(&mut root)?;

        match Event::from(crossterm::event::read()?) {
            Event::Key(key) if key.is_quit() => break,
            Event::Key(key) => {
                if !focus.on_key_event(&key) {
                    root.on_key_event(&key);
                }
            }
            Event::Resize { .. } => terminal.refresh_size()?,
            Event::Paste(text) => {
                if notes.borrow().is_focused() {
                    notes.borrow_mut().insert_text(&text);
                }
            }
            _ => {}
        }
    }

    info!("demo finished");
    Ok(())
}

