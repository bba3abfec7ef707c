//! A horizontal command bar in the style of classic dmenu.
//!
//! One row: the search box on the left, then the matching commands side by
//! side. Tab and shift-tab walk the candidates, enter picks one. The picked
//! command line is printed on stdout so the bar can be piped into a shell:
//! `cargo run --example command-bar | sh`.
//!
//! Unlike the password-picker demo, this one routes the commit back through
//! the menu so the delegate's `on_commit` hook runs and reports the dispatch
//! as its own message.

use bubbletea_rs::{tick, Cmd, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use passmenu_widgets::filter::MenuDelegate;
use passmenu_widgets::menu::{self, Hotkey, HotkeyAction, MenuStyles};
use passmenu_widgets::window::{Orientation, ScreenRect};
use std::time::Duration;

/// Notification from the delegate that a command line is ready to dispatch.
#[derive(Debug)]
struct DispatchMsg(String);

/// Offers a fixed command list, prefix-matched like dmenu_run.
struct CommandDelegate {
    commands: Vec<String>,
}

impl MenuDelegate for CommandDelegate {
    fn on_search_changed(&mut self, query: &str) -> Vec<String> {
        self.commands
            .iter()
            .filter(|command| command.starts_with(query))
            .cloned()
            .collect()
    }

    fn on_commit(&mut self, choice: &str) -> Option<Cmd> {
        let line = choice.to_string();
        Some(tick(Duration::from_nanos(1), move |_| {
            Box::new(DispatchMsg(line.clone())) as Msg
        }))
    }
}

struct CommandBar {
    menu: menu::Model,
    dispatched: Option<String>,
}

impl Model for CommandBar {
    fn init() -> (Self, Option<Cmd>) {
        let delegate = CommandDelegate {
            commands: [
                "alacritty",
                "emacs",
                "firefox",
                "gimp",
                "inkscape",
                "libreoffice",
                "mpv",
                "signal-desktop",
                "thunderbird",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        };
        let mut menu = menu::Model::new(
            // Wider than any terminal; the resolve step clamps it.
            ScreenRect::new(0, 0, u16::MAX, 1),
            MenuStyles::default(),
            Orientation::Horizontal,
            delegate,
        );
        menu.set_placeholder("run");
        menu.set_hotkeys(vec![
            Hotkey::new(HotkeyAction::SelectNext, KeyCode::Tab),
            // crossterm reports shift+tab as BackTab with SHIFT still set.
            Hotkey::new(HotkeyAction::SelectPrevious, KeyCode::BackTab)
                .with_modifiers(KeyModifiers::SHIFT),
        ]);
        (
            Self {
                menu,
                dispatched: None,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        // Forward the commit notification into the menu instead of quitting
        // on it; the menu answers with the delegate's dispatch command.
        let (done, _) = self.menu.did_commit(&msg);
        if done {
            return self.menu.update(msg);
        }
        if let Some(dispatch) = msg.downcast_ref::<DispatchMsg>() {
            self.dispatched = Some(dispatch.0.clone());
            return Some(bubbletea_rs::quit());
        }
        if self.menu.was_cancelled(&msg) {
            return Some(bubbletea_rs::quit());
        }
        self.menu.update(msg)
    }

    fn view(&self) -> String {
        self.menu.view()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<CommandBar>::builder().build()?;
    let bar = program.run().await?;

    if let Some(line) = bar.dispatched {
        println!("{line}");
    }
    Ok(())
}
