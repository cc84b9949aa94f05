use crate::error::Result;
use crate::hours::report::Report;
use console::style;

pub fn output_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn output_table(report: &Report) -> Result<()> {
    if report.authors.is_empty() {
        println!("No commits matched the current filters");
        return Ok(());
    }

    println!(
        "{:<32} {:<20} {:>8} {:>8}",
        style("Email").bold(),
        style("Author").bold(),
        style("Hours").bold(),
        style("Commits").bold()
    );
    println!("{}", "─".repeat(72));

    let max_hours = report
        .authors
        .iter()
        .map(|a| a.hours)
        .fold(f64::MIN, f64::max)
        .max(f64::EPSILON);

    for author in &report.authors {
        let intensity = ((author.hours / max_hours) * 5.0) as u32;
        let bar = match intensity {
            0 => " ",
            1 => "▁",
            2 => "▃",
            3 => "▅",
            4 => "▇",
            _ => "█",
        };
        println!(
            "{:<32} {:<20} {:>8.2} {:>8} {}",
            author.email,
            author.name,
            author.hours,
            author.commits,
            style(bar).green()
        );
    }

    println!("{}", "─".repeat(72));
    println!(
        "{:<32} {:<20} {:>8.2} {:>8}",
        style("total").bold(),
        "",
        report.total_hours,
        report.total_commits
    );

    Ok(())
}
