use crate::config::{StrokeColor, Tool};
use crate::session::editor::Editor;
use crate::session::messages::EditorMsg;

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Delete,
    Backspace,
    Character(char),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { control: false };
    pub const CONTROL: Modifiers = Modifiers { control: true };
}

pub fn handle_key_event(editor: &Editor, key: Key, modifiers: Modifiers) -> Option<EditorMsg> {
    if !editor.is_open() {
        return None;
    }

    match key {
        Key::Escape => Some(EditorMsg::Cancel),
        Key::Enter if modifiers.control => Some(EditorMsg::Done),
        Key::Delete | Key::Backspace => Some(EditorMsg::Clear),
        // Tool shortcuts: p/r/a/h
        Key::Character(c) if !modifiers.control => match c.to_ascii_lowercase() {
            'p' => Some(EditorMsg::SelectTool(Tool::Pen)),
            'r' => Some(EditorMsg::SelectTool(Tool::Rectangle)),
            'a' => Some(EditorMsg::SelectTool(Tool::Arrow)),
            'h' => Some(EditorMsg::SelectTool(Tool::Highlighter)),
            // 1-6: palette entries in toolbar order
            d => d
                .to_digit(10)
                .and_then(|n| StrokeColor::from_position(n as usize))
                .map(EditorMsg::SelectColor),
        },
        _ => None,
    }
}
