//! Scripted camera input.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! down 100 100      # pointer pressed at (x, y)
//! move 140 90       # pointer moved
//! up                # pointer released
//! leave             # pointer left the surface
//! wheel -120        # wheel delta in pixels, negative zooms in
//! key ArrowLeft     # key press
//! key KeyW shift    # key press with Shift held
//! ```

use anyhow::{bail, Context};
use cubeworld_input::{CameraController, KeyCode, Modifiers};
use glam::Vec2;

/// One scripted input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    Down(Vec2),
    Move(Vec2),
    Up,
    Leave,
    Wheel(f32),
    Key(KeyCode, Modifiers),
}

impl InputCommand {
    /// Feed this command to `controller`.
    pub fn apply(self, controller: &mut CameraController) {
        match self {
            Self::Down(pos) => controller.pointer_down(pos),
            Self::Move(pos) => {
                controller.pointer_move(pos);
            }
            Self::Up => controller.pointer_up(),
            Self::Leave => controller.pointer_leave(),
            Self::Wheel(delta) => {
                controller.wheel(delta);
            }
            Self::Key(key, modifiers) => {
                controller.key_down(key, modifiers);
            }
        }
    }
}

/// Parse a whole script.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<InputCommand>> {
    text.lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then(|| parse_line(line).with_context(|| format!("line {}", n + 1)))
        })
        .collect()
}

fn parse_line(line: &str) -> anyhow::Result<InputCommand> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match (command, args.as_slice()) {
        ("down", [x, y]) => InputCommand::Down(point(x, y)?),
        ("move", [x, y]) => InputCommand::Move(point(x, y)?),
        ("up", []) => InputCommand::Up,
        ("leave", []) => InputCommand::Leave,
        ("wheel", [dy]) => InputCommand::Wheel(number(dy)?),
        ("key", [name]) => InputCommand::Key(key_code(name)?, Modifiers::empty()),
        ("key", [name, "shift"]) => InputCommand::Key(key_code(name)?, Modifiers::SHIFT),
        _ => bail!("cannot parse '{line}'"),
    };
    Ok(command)
}

fn number(text: &str) -> anyhow::Result<f32> {
    text.parse()
        .with_context(|| format!("'{text}' is not a number"))
}

fn point(x: &str, y: &str) -> anyhow::Result<Vec2> {
    Ok(Vec2::new(number(x)?, number(y)?))
}

/// Parse a key code by its winit name, e.g. `ArrowUp` or `KeyR`.
fn key_code(name: &str) -> anyhow::Result<KeyCode> {
    let key = match name {
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "Equal" => KeyCode::Equal,
        "Minus" => KeyCode::Minus,
        "NumpadAdd" => KeyCode::NumpadAdd,
        "NumpadSubtract" => KeyCode::NumpadSubtract,
        "Home" => KeyCode::Home,
        "Space" => KeyCode::Space,
        "Escape" => KeyCode::Escape,
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        _ => bail!("unknown key '{name}'"),
    };
    Ok(key)
}
