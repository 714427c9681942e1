//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::Char('y') if ctrl => {
                self.copy_chat_code();
                return;
            }
            KeyCode::Esc => {
                if self.dropdown.take().is_some() {
                    self.mark_dirty();
                } else {
                    self.quit();
                }
                return;
            }
            KeyCode::Tab => {
                self.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return;
            }
            _ => {}
        }

        if self.dropdown.is_some() {
            match key.code {
                KeyCode::Up => self.move_dropdown(-1),
                KeyCode::Down => self.move_dropdown(1),
                KeyCode::Enter => self.confirm_dropdown(),
                _ => {}
            }
            return;
        }

        match (self.focus, key.code) {
            (_, KeyCode::Up) => self.focus_prev(),
            (_, KeyCode::Down) => self.focus_next(),

            (Focus::ChatCode, KeyCode::Char('u')) if ctrl => {
                self.edit_chat_code(String::clear)
            }
            (Focus::ChatCode, KeyCode::Char(c)) if !ctrl => {
                self.edit_chat_code(|text| text.push(c))
            }
            (Focus::ChatCode, KeyCode::Backspace) => self.edit_chat_code(|text| {
                text.pop();
            }),
            (Focus::ChatCode, KeyCode::Enter) => self.focus_next(),

            (Focus::Copy, KeyCode::Enter | KeyCode::Char(' ')) => self.copy_chat_code(),

            (Focus::TypeSelector, KeyCode::Enter | KeyCode::Char(' ')) => self.open_dropdown(),

            (Focus::Property(index), KeyCode::Char(c)) if !ctrl => {
                if let Some(digit) = c.to_digit(10) {
                    self.push_property_digit(index, digit);
                }
            }
            (Focus::Property(index), KeyCode::Backspace) => self.pop_property_digit(index),
            (Focus::Property(_), KeyCode::Enter) => self.focus_next(),

            (Focus::Footer(button), KeyCode::Enter | KeyCode::Char(' ')) => {
                self.open_footer_link(button)
            }

            _ => {}
        }
    }

    /// Bracketed paste: appended to the chat code field when it has focus.
    pub fn handle_paste(&mut self, pasted: &str) {
        if self.focus != Focus::ChatCode {
            return;
        }
        let pasted = pasted.trim();
        self.edit_chat_code(|text| text.push_str(pasted));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, RecordingPlatform};
    use crate::api::Gw2ApiClient;
    use crate::app::FooterButton;
    use crate::chatlink::{ChatLink, ChatLinkType};
    use crate::component::MainComponent;
    use crate::state::item;
    use std::sync::Arc;

    fn app(initial: Option<ChatLink>) -> (App, RecordingPlatform) {
        let platform = RecordingPlatform::new();
        let api = Arc::new(Gw2ApiClient::new(Arc::new(MockHttpClient::new())));
        let component = Arc::new(MainComponent::new(api, Arc::new(platform.clone()), initial));
        (App::new(component, 1 << 20), platform)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_typing_edits_chat_code() {
        let (mut app, _) = app(None);
        for c in "[&BnMVAAA=]".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.chat_link().link_type(), Some(ChatLinkType::Skill));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.chat_link().link_type(), None);

        ctrl(&mut app, 'u');
        assert_eq!(app.chat_code_text(), "");
    }

    #[test]
    fn test_paste_only_into_chat_code() {
        let (mut app, _) = app(None);
        app.handle_paste("  [&CQEAAAA=]\n");
        assert_eq!(app.chat_link().link_type(), Some(ChatLinkType::Recipe));

        press(&mut app, KeyCode::Tab);
        app.handle_paste("[&CwEAAAA=]");
        assert_eq!(app.chat_link().link_type(), Some(ChatLinkType::Recipe));
    }

    #[test]
    fn test_ctrl_y_copies() {
        let (mut app, platform) = app(Some(ChatLink::Outfit { outfit_id: 1 }));
        ctrl(&mut app, 'y');
        assert_eq!(platform.clipboard(), vec!["[&CwEAAAA=]"]);
    }

    #[test]
    fn test_escape_closes_dropdown_then_quits() {
        let (mut app, _) = app(None);
        app.focus = Focus::TypeSelector;
        press(&mut app, KeyCode::Enter);
        assert!(app.dropdown.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.dropdown.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _) = app(None);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_dropdown_keys_switch_type() {
        let (mut app, _) = app(None);
        app.focus = Focus::TypeSelector;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat_link().link_type(), Some(ChatLinkType::Skin));
        assert_eq!(app.chat_link().encoded(), None);
    }

    #[test]
    fn test_property_keys() {
        let (mut app, _) = app(Some(ChatLink::item(1, 46762)));
        app.focus = Focus::Property(1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.chat_link().get(item::ITEM_ID), Some(4676));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.chat_link().get(item::ITEM_ID), Some(46762));
        assert_eq!(app.chat_link().encoded(), Some("[&AgGqtgAA]"));
    }

    #[test]
    fn test_footer_enter_opens_url() {
        let (mut app, platform) = app(None);
        app.focus = Focus::Footer(FooterButton::GitHub);
        press(&mut app, KeyCode::Enter);
        assert_eq!(platform.opened_urls(), vec![FooterButton::GitHub.url()]);
    }
}
