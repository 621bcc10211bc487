use std::io::{ self, BufRead, Write };

use crossterm::{
    terminal::{ Clear, ClearType, enable_raw_mode, disable_raw_mode },
    cursor::MoveTo,
    execute,
    event::{
        self,
        Event,
        KeyModifiers,
        KeyCode, KeyEvent, KeyEventKind,
    },
};

use crate::Result;

/// Everything the game needs from the screen and keyboard.
///
/// `read_line` and `read_key` return `None` once input is exhausted.
pub trait Console {
    fn clear_screen(&mut self) -> Result<()>;
    fn render_line(&mut self, line: &str) -> Result<()>;
    fn read_line(&mut self) -> Result<Option<String>>;
    fn read_key(&mut self) -> Result<Option<char>>;
}

/// Console on the process terminal: stdout for output, stdin for lines and
/// crossterm key events for single key presses.
pub struct Terminal {
    out: io::Stdout,
    input: io::StdinLock<'static>,
}

impl Terminal {

    #[inline]
    pub fn new() -> Self {
        Terminal {
            out: io::stdout(),
            input: io::stdin().lock(),
        }
    }

    fn key() -> Result<char> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(c) = key_char(key) {
                    return Ok(c)
                }
            }
        }
    }
}

/// Character a key press reads as; `None` for releases and repeats.
/// Ctrl+C reads as `q`, other Ctrl chords and non-character keys as `'\0'`.
fn key_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(match key.code {
            KeyCode::Char('c') => 'q',
            _ => '\0',
        })
    }
    Some(match key.code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\n',
        _ => '\0',
    })
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for Terminal {

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        Ok(())
    }

    fn render_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Ok(None)
        }
        let len = s.trim_end_matches(&['\r', '\n'][..]).len();
        s.truncate(len);
        Ok(Some(s))
    }

    fn read_key(&mut self) -> Result<Option<char>> {
        self.out.flush()?;
        enable_raw_mode()?;
        // Restore cooked mode even when the read failed.
        let k = Self::key();
        disable_raw_mode()?;
        k.map(Some)
    }
}
