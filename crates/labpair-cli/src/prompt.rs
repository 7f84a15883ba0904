use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Ask which worksheet to read, repeating until a listed index is entered.
pub fn prompt_for_sheet<R, W>(names: &[String], input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    if names.is_empty() {
        bail!("Teamset export contains no worksheets");
    }

    loop {
        writeln!(output, "Select sheet number:")?;
        for (index, name) in names.iter().enumerate() {
            writeln!(output, "{}. {}", index, name)?;
        }
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read sheet selection")?;
        if read == 0 {
            bail!("No worksheet selected");
        }

        match line.trim().parse::<usize>().ok().and_then(|i| names.get(i)) {
            Some(name) => return Ok(name.clone()),
            None => writeln!(output, "Invalid selection.")?,
        }
    }
}
