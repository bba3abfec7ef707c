//! A dmenu-style password picker.
//!
//! Shows a fuzzy-searchable menu over a small password store listing. Type
//! to filter, move with the arrow keys or ctrl+n / ctrl+p, press enter to
//! print the chosen entry path on stdout, esc to leave without choosing.
//!
//! Run with: `cargo run --example password-picker`

use bubbletea_rs::{Cmd, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use passmenu_widgets::filter::FuzzyDelegate;
use passmenu_widgets::menu::{self, Hotkey, HotkeyAction, MenuStyles};
use passmenu_widgets::window::{Orientation, ScreenRect};

/// The entry paths a real picker would read from the password store.
fn store_entries() -> Vec<String> {
    [
        "bank/checking",
        "bank/savings",
        "bank/credit-card",
        "email/work",
        "email/personal",
        "dev/github",
        "dev/gitlab",
        "dev/crates-io",
        "dev/docker-hub",
        "social/mastodon",
        "social/lobsters",
        "shop/hardware-store",
        "shop/bookshop",
        "vpn/office",
        "wifi/home",
        "wifi/cabin",
        "server/backup-box",
        "server/web-host",
        "license/jetbrains",
        "misc/luggage-lock",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

struct Picker {
    menu: menu::Model,
    chosen: Option<String>,
}

impl Model for Picker {
    fn init() -> (Self, Option<Cmd>) {
        let delegate = FuzzyDelegate::new(store_entries());
        let mut menu = menu::Model::new(
            ScreenRect::new(0, 0, 48, 12),
            MenuStyles::default(),
            Orientation::Vertical,
            delegate,
        );
        menu.set_placeholder("Search passwords");
        menu.set_hotkeys(vec![
            Hotkey::new(HotkeyAction::SelectNext, KeyCode::Char('n'))
                .with_modifiers(KeyModifiers::CONTROL),
            Hotkey::new(HotkeyAction::SelectPrevious, KeyCode::Char('p'))
                .with_modifiers(KeyModifiers::CONTROL),
        ]);
        menu.set_show_help(true);
        (Self { menu, chosen: None }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let (done, choice) = self.menu.did_commit(&msg);
        if done {
            self.chosen = Some(choice);
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
    let program = Program::<Picker>::builder().build()?;
    let picker = program.run().await?;

    // Like dmenu: the picked entry goes to stdout for scripts to consume.
    if let Some(choice) = picker.chosen {
        println!("{choice}");
    }
    Ok(())
}
