use crate::calculator;
use crate::error::{Result, ScoreError};
use crate::form::{parse_count, parse_scale, parse_score};
use crate::report::text;
use crate::types::input::{ResultScale, ScoreInput};
use crate::types::policy::{Policy, COLLOQUIUM_COUNT};
use std::io::{BufRead, Write};

/// Interactive console session. Each invalid answer is reported and the same
/// question is asked again.
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    policy: &'a Policy,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, policy: &'a Policy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    /// Runs submissions until the user declines another round.
    pub fn run(&mut self) -> Result<u32> {
        writeln!(self.output, "Exam entry score calculator")?;
        let mut rounds = 0;
        loop {
            let submission = self.collect()?;
            let result = calculator::compute(&submission, self.policy);
            writeln!(self.output)?;
            writeln!(self.output, "{}", text::to_text(&result))?;
            rounds += 1;
            tracing::info!(round = rounds, total = result.total_score, "session round complete");

            let again = self.ask("\nagain? [y/N]: ")?;
            if !matches!(again.to_ascii_lowercase().as_str(), "y" | "yes") {
                writeln!(self.output, "goodbye")?;
                return Ok(rounds);
            }
        }
    }

    fn collect(&mut self) -> Result<ScoreInput> {
        let policy = self.policy;

        writeln!(self.output, "\ncourse hours:")?;
        for (index, hours) in policy.valid_hours.iter().enumerate() {
            writeln!(self.output, "  {}. {} hours", index + 1, hours)?;
        }
        let choices = policy.valid_hours.len();
        let choice = self.ask_until(&format!("choice (1-{choices}): "), |raw| {
            match parse_count(raw, choices as u32)? {
                0 => Err(format!("must be between 1 and {choices}")),
                n => Ok(n as usize),
            }
        })?;
        let course_hours = policy.valid_hours[choice - 1];

        let mut colloquium_scores = [0.0; COLLOQUIUM_COUNT];
        for (index, slot) in colloquium_scores.iter_mut().enumerate() {
            *slot = self.ask_until(&format!("colloquium {} (0-10): ", index + 1), |raw| {
                parse_score(raw, policy.component_max)
            })?;
        }

        let max_seminars = policy.max_seminars;
        let count = self.ask_until(&format!("seminar count (1-{max_seminars}): "), |raw| {
            match parse_count(raw, max_seminars as u32)? {
                0 => Err(format!("must be between 1 and {max_seminars}")),
                n => Ok(n as usize),
            }
        })?;
        let mut seminar_scores = Vec::with_capacity(count);
        for index in 1..=count {
            seminar_scores.push(self.ask_until(&format!("seminar {index} (0-10): "), |raw| {
                parse_score(raw, policy.component_max)
            })?);
        }

        let independent_work = self.ask_until("independent work (0-10): ", |raw| {
            parse_score(raw, policy.component_max)
        })?;
        let absences = self.ask_until(
            &format!("absences (0-{}): ", policy.max_absences),
            |raw| parse_count(raw, policy.max_absences),
        )?;
        let result_scale = self.ask_until("result scale (50/10) [50]: ", |raw| {
            if raw.is_empty() {
                Ok(ResultScale::default())
            } else {
                parse_scale(raw)
            }
        })?;

        Ok(ScoreInput {
            course_hours,
            colloquium_scores,
            seminar_scores,
            independent_work,
            absences,
            result_scale,
        })
    }

    fn ask_until<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> std::result::Result<T, String>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "error: {message}")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ScoreError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
