use std::io::{self, BufRead, Write};

use shared::models::moves::Move;

/// Line-based question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Prints `question` without a newline and returns the trimmed answer.
    /// Fails with `UnexpectedEof` once input is exhausted.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("y"))
    }

    /// Shows the move menu until a valid number is entered.
    pub fn read_move(&mut self) -> io::Result<Move> {
        loop {
            self.say("Choose your move:")?;
            for (index, option) in Move::ALL.iter().enumerate() {
                self.say(&format!("{}. {}", index + 1, option))?;
            }

            let answer = self.ask("Enter the number of your move: ")?;
            match answer.parse::<usize>() {
                Ok(choice) => match Move::from_choice(choice) {
                    Some(chosen) => return Ok(chosen),
                    None => self.say(&format!(
                        "Invalid choice. Please enter a number between 1 and {}.",
                        Move::ALL.len()
                    ))?,
                },
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
