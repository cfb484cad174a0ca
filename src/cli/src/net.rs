use cube_core::{Color, Face, Renderer, Stickers};
use owo_colors::{OwoColorize, Style};

fn sticker_style(color: Color) -> Style {
    let style = Style::new().black();
    match color {
        Color::White => style.on_bright_white(),
        Color::Yellow => style.on_bright_yellow(),
        Color::Red => style.on_red(),
        Color::Orange => style.on_truecolor(255, 140, 0),
        Color::Blue => style.on_blue(),
        Color::Green => style.on_green(),
    }
}

fn painted(color: Color) -> String {
    format!(" {color} ").style(sticker_style(color)).to_string()
}

fn push_row(out: &mut String, stickers: &Stickers, face: Face, row: usize) {
    for color in stickers[face][row] {
        out.push_str(&painted(color));
    }
}

/// The unfolded cube with the up face on top, the left, front, right and back
/// faces across the middle, and the down face at the bottom.
pub fn colored_net(stickers: &Stickers) -> String {
    let indent = " ".repeat(9);
    let mut out = String::new();
    for row in 0..3 {
        out.push_str(&indent);
        push_row(&mut out, stickers, Face::Up, row);
        out.push('\n');
    }
    for row in 0..3 {
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            push_row(&mut out, stickers, face, row);
        }
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str(&indent);
        push_row(&mut out, stickers, Face::Down, row);
        out.push('\n');
    }
    out
}

/// Prints the colored net to stderr every time the cube changes.
#[derive(Debug, Default)]
pub struct NetRenderer {
    frames: usize,
}

impl Renderer for NetRenderer {
    fn render(&mut self, stickers: &Stickers) {
        eprintln!("{}", format!("#{}", self.frames).dimmed());
        eprintln!("{}", colored_net(stickers));
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::Move;

    #[test]
    fn test_net_has_every_sticker() {
        let stickers = Stickers::SOLVED.applied(Move::R).applied(Move::U);
        let net = colored_net(&stickers);
        assert_eq!(net.lines().count(), 9);
        for color in Color::ALL {
            assert_eq!(net.matches(&painted(color)).count(), 9, "{color}");
        }
    }
}
