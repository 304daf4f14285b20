use crate::utils::error::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub fn prompt_input(prompt: &str) -> AppResult<String> {
    let stdin = io::stdin();
    prompt_input_from(&mut stdin.lock(), prompt)
}

/// Like [`prompt_input`] but reads from any buffered source
pub fn prompt_input_from<R: BufRead>(reader: &mut R, prompt: &str) -> AppResult<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| AppError::Io(e.to_string()))?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .map_err(|e| AppError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(prompt: &str) -> AppResult<bool> {
    let stdin = io::stdin();
    prompt_yes_no_from(&mut stdin.lock(), prompt)
}

pub fn prompt_yes_no_from<R: BufRead>(reader: &mut R, prompt: &str) -> AppResult<bool> {
    loop {
        let mut input = String::new();
        print!("{} [y/N]: ", prompt);
        io::stdout().flush().map_err(|e| AppError::Io(e.to_string()))?;

        let read = reader
            .read_line(&mut input)
            .map_err(|e| AppError::Io(e.to_string()))?;
        if read == 0 {
            // EOF counts as "no"
            println!();
            return Ok(false);
        }

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}
