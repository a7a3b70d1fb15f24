//! Interactive menu: read a token, look it up, chart, repeat.

use std::io::{BufRead, Write};

use crate::{
    cli::handlers::show_waveform,
    core::{
        config::{Config, SimConfig},
        error::ChartError,
    },
    signal::Waveform,
};

/// Token → waveform, in menu order.
pub const MENU: [(&str, Waveform); 3] = [
    ("1", Waveform::Sine),
    ("2", Waveform::Square),
    ("3", Waveform::Sawtooth),
];
pub const QUIT: &str = "q";

pub const INVALID: &str = "Invalid selection, please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Wave(Waveform),
    Quit,
    Invalid,
}

/// Trimmed, case-insensitive lookup of one input line.
#[must_use]
pub fn select(input: &str) -> Selection {
    let token = input.trim().to_lowercase();
    if token == QUIT {
        return Selection::Quit;
    }
    MENU.iter()
        .find(|(key, _)| *key == token)
        .map_or(Selection::Invalid, |&(_, w)| Selection::Wave(w))
}

fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\nFourier Transform Demo")?;
    for (key, wave) in &MENU {
        writeln!(out, "{key}. {}", wave.name())?;
    }
    writeln!(out, "{QUIT}. Quit")?;
    write!(out, "Select waveform: ")?;
    out.flush()
}

/// Loop until `q` or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    sim: &SimConfig,
    cfg: &Config,
) -> Result<(), ChartError> {
    let mut line = String::new();
    loop {
        print_menu(out)?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("end of input, leaving menu");
            writeln!(out)?;
            return Ok(());
        }

        match select(&line) {
            Selection::Quit => return Ok(()),
            Selection::Invalid => {
                log::debug!("rejected menu input {:?}", line.trim());
                writeln!(out, "{INVALID}")?;
            }
            Selection::Wave(w) => show_waveform(out, w, sim, cfg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_trimmed_and_case_folded() {
        assert_eq!(select("1\n"), Selection::Wave(Waveform::Sine));
        assert_eq!(select("  2 "), Selection::Wave(Waveform::Square));
        assert_eq!(select("3"), Selection::Wave(Waveform::Sawtooth));
        assert_eq!(select("Q\r\n"), Selection::Quit);
    }

    #[test]
    fn anything_else_is_invalid() {
        for s in ["", "4", "sine", "1 2", "qq"] {
            assert_eq!(select(s), Selection::Invalid, "{s:?}");
        }
    }
}
