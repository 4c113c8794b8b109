use crate::analyzer::BumpResult;
use crate::boundary::BoundaryWarning;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

pub fn display_bump_result(result: &BumpResult) {
    println!(
        "{} {} ({:?} bump)",
        style("Next version:").bold(),
        style(&result.next_version).green(),
        result.bump_type
    );

    let notes = &result.commit_messages_by_note_rule;
    display_note_group("Breaking changes", &notes.major);
    display_note_group("Features", &notes.minor);
    display_note_group("Fixes", &notes.patch);
    display_note_group("Notes", &notes.raw_override);
}

fn display_note_group(title: &str, notes: &[String]) {
    if notes.is_empty() {
        return;
    }

    println!("\n{}", style(title).underlined());
    for note in notes {
        println!("  - {}", note.replace('\n', "\n    "));
    }
}
