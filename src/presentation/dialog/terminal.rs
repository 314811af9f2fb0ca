use std::io::{BufRead, Write};

use super::selection::SelectionDialog;

enum Command {
    ToggleAll,
    ToggleRow(usize),
    Submit,
    Dismiss,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "a" | "all" => Command::ToggleAll,
        "" | "t" | "transcribe" => Command::Submit,
        "q" | "quit" => Command::Dismiss,
        _ => match line.parse::<usize>() {
            Ok(n) if n >= 1 => Command::ToggleRow(n - 1),
            _ => Command::Unknown,
        },
    }
}

/// Renders the audio file checklist on `output` and drives it from
/// `input` lines until the user submits or dismisses. Returns the
/// selected links in original order, or `None` on dismissal.
pub fn run_selection<R, W>(
    labels: Vec<String>,
    input: R,
    mut output: W,
) -> std::io::Result<Option<Vec<String>>>
where
    R: BufRead,
    W: Write,
{
    let mut selection = None;
    let mut dialog = SelectionDialog::new(labels, |selected| selection = Some(selected));

    writeln!(output, "Select audio files to transcribe")?;
    let mut lines = input.lines();
    let submitted = loop {
        let all_marker = if dialog.state().all_checked() { 'x' } else { ' ' };
        writeln!(output, "  [{all_marker}] a. All")?;
        for (idx, row) in dialog.state().rows().iter().enumerate() {
            let marker = if row.checked { 'x' } else { ' ' };
            writeln!(output, "  [{marker}] {}. {}", idx + 1, row.label)?;
        }
        write!(output, "toggle (number/a), t to transcribe, q to cancel: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break false;
        };
        match parse_command(&line?) {
            Command::ToggleAll => {
                let checked = dialog.state().all_checked();
                dialog.state_mut().set_all(!checked);
            }
            Command::ToggleRow(idx) => dialog.state_mut().toggle(idx),
            Command::Submit => break true,
            Command::Dismiss => break false,
            Command::Unknown => writeln!(output, "unrecognized input")?,
        }
    };

    if submitted {
        dialog.submit();
    } else {
        dialog.dismiss();
    }
    Ok(selection)
}
