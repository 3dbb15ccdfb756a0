//! Console collaborators: blocking input and cosmetic screen control.
//!
//! The table only depends on the [`Prompt`] and [`Screen`] traits. The
//! line-based and ANSI implementations here back the binary; tests plug in
//! scripted prompts and the [`Silent`] screen.

use std::io::{self, BufRead, Write};

use crate::error::PromptError;

/// Blocking input used by interactive players.
pub trait Prompt {
    /// Reads an integer in `min..=max`, asking again until one is given.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input cannot be read.
    fn read_integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, PromptError>;

    /// Asks a yes/no question, asking again until one of the two is given.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the input cannot be read.
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn read_integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, PromptError> {
        (**self).read_integer(prompt, min, max)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        (**self).confirm(prompt)
    }
}

enum Source {
    // Locked per line so several prompts and the screen can share stdin.
    Stdin(io::Stdin),
    Reader(Box<dyn BufRead>),
}

impl Source {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read_line(buf),
            Self::Reader(reader) => reader.read_line(buf),
        }
    }
}

/// Prompt that reads whole lines and echoes questions to an output.
pub struct LinePrompt {
    input: Source,
    output: Box<dyn Write>,
}

impl LinePrompt {
    /// Creates a prompt over the process's standard streams.
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            input: Source::Stdin(io::stdin()),
            output: Box::new(io::stdout()),
        }
    }

    /// Creates a prompt over arbitrary streams.
    #[must_use]
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Source::Reader(Box::new(input)),
            output: Box::new(output),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_owned())
    }
}

impl Prompt for LinePrompt {
    fn read_integer(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(n) if (i64::from(min)..=i64::from(max)).contains(&n) => {
                    return Ok(n as u32);
                }
                Ok(n) => writeln!(self.output, "Number {n} out of range [{min}] .. [{max}]")?,
                Err(_) => writeln!(self.output, "{answer} is not an integer.")?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let question = format!("{prompt} [Y/N]: ");
        loop {
            let answer = self.ask(&question)?;
            match answer.to_uppercase().as_str() {
                "Y" | "YES" => return Ok(true),
                "N" | "NO" => return Ok(false),
                _ => writeln!(self.output, "Please answer Y or N.")?,
            }
        }
    }
}

/// Screen control between phases of a round. Purely cosmetic.
pub trait Screen {
    /// Shows a line of text.
    fn show(&mut self, line: &str);

    /// Clears the screen.
    fn clear(&mut self) {}

    /// Waits until the user acknowledges what is on screen.
    fn pause(&mut self) {}
}

/// Screen that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Screen for Silent {
    fn show(&mut self, _line: &str) {}
}

/// ANSI terminal on standard output.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    interactive: bool,
}

impl Terminal {
    /// Creates a terminal screen. A non-interactive terminal never clears
    /// and never waits.
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Screen for Terminal {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear(&mut self) {
        if self.interactive {
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        }
    }

    fn pause(&mut self) {
        if !self.interactive {
            return;
        }
        print!("Press Enter to continue...");
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
    }
}
