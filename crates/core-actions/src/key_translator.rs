//! Keyboard shortcut to `Action` translation.
//!
//! Shortcuts cover the high-frequency operations only; everything else goes
//! through the typed console. Translation is total: every recognized `Key`
//! maps to exactly one action, so the table below is the whole binding set.

use crate::{Action, EditKind, MotionKind, ReadKind};

/// The shortcut keys the editor binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    ShiftUp,
    ShiftDown,
    CtrlL,
    CtrlB,
    CtrlF,
    CtrlS,
}

pub fn translate(key: Key) -> Action {
    match key {
        Key::Up => Action::Motion(MotionKind::PrevSibling),
        Key::Down => Action::Motion(MotionKind::NextSibling),
        Key::Left => Action::Motion(MotionKind::StepOut),
        Key::Right => Action::Motion(MotionKind::StepIn),
        Key::ShiftUp => Action::Edit(EditKind::NewLineBefore),
        Key::ShiftDown => Action::Edit(EditKind::NewLineAfter),
        Key::CtrlL => Action::Read(ReadKind::Line),
        Key::CtrlB => Action::Read(ReadKind::Block),
        Key::CtrlF => Action::Read(ReadKind::Function),
        Key::CtrlS => Action::Save(None),
    }
}
