// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Prompt-driven construction of one [`InvocationRequest`].
//!
//! The user picks a target by index, then an operation by index, then answers
//! one prompt per parameter. Answers are passed to the engine verbatim apart
//! from the line ending; conversion happens in the same pipeline as the
//! command form.

use std::io::{self, BufRead, Write};

use crate::engine::InvocationRequest;
use crate::observability::messages::{shell::SelectionRejected, StructuredLog};
use crate::registry::Registry;

use super::catalog::signature;

/// What the questions produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Collected {
    /// Every question was answered.
    Request(InvocationRequest),
    /// There was nothing to choose from; the message says why.
    NoChoices(String),
    /// Input closed before the last answer.
    InputEnded,
}

/// Ask the questions needed to build one request.
pub fn collect_request<R: BufRead, W: Write>(
    registry: &Registry,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Collected> {
    if registry.is_empty() {
        return Ok(Collected::NoChoices("No targets are registered.".to_string()));
    }

    let names: Vec<String> = registry
        .targets()
        .iter()
        .map(|target| target.name().to_string())
        .collect();
    let Some(target_index) = choose("Select a target", &names, prompt, input, out)? else {
        return Ok(Collected::InputEnded);
    };
    let target = &registry.targets()[target_index];

    if target.operations().is_empty() {
        return Ok(Collected::NoChoices(format!(
            "Target '{}' has no operations.",
            target.name()
        )));
    }

    let signatures: Vec<String> = target.operations().iter().map(signature).collect();
    let Some(operation_index) = choose("Select an operation", &signatures, prompt, input, out)?
    else {
        return Ok(Collected::InputEnded);
    };
    let operation = &target.operations()[operation_index];

    let mut arguments = Vec::with_capacity(operation.parameters().len());
    for parameter in operation.parameters() {
        writeln!(out, "{}:", parameter)?;
        match read_answer(prompt, input, out)? {
            Some(answer) => arguments.push(answer),
            None => return Ok(Collected::InputEnded),
        }
    }

    Ok(Collected::Request(InvocationRequest::new(
        target.name(),
        operation.name(),
        arguments,
    )))
}

/// List `choices` numbered from 1 and ask until a listed number is given.
fn choose<R: BufRead, W: Write>(
    question: &str,
    choices: &[String],
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<usize>> {
    writeln!(out, "{}:", question)?;
    for (index, choice) in choices.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, choice)?;
    }

    loop {
        let Some(answer) = read_answer(prompt, input, out)? else {
            return Ok(None);
        };

        match answer.trim().parse::<usize>() {
            Ok(number) if (1..=choices.len()).contains(&number) => return Ok(Some(number - 1)),
            _ => {
                SelectionRejected {
                    question,
                    answer: &answer,
                    choices: choices.len(),
                }
                .log();
                writeln!(out, "Enter a number between 1 and {}.", choices.len())?;
            }
        }
    }
}

/// Print the prompt and read one line. `None` once input is exhausted.
fn read_answer<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer_len = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(answer_len);
    Ok(Some(line))
}
