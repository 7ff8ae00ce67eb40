use colored::*;
use jobstat::analysis::{ColorMapping, ColorSource, Entity};
use jobstat::color::Rgb;
use jobstat::dataset::Dataset;

/// Width of the skill cloud before wrapping
const CLOUD_WIDTH: usize = 80;

/// Column width cap for the preview table
const PREVIEW_CELL_WIDTH: usize = 18;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

fn swatch(color: Rgb) -> ColoredString {
    "██".truecolor(color.r, color.g, color.b)
}

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_file_info(display_name: &str, rows: usize, columns: usize) {
    println!("File: {}", display_name);
    println!("Rows: {}, Columns: {}", rows, columns);
    println!();
}

/// Format a number with thousands separators (e.g., 123456.7 -> "123,457")
pub(crate) fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

/// First `limit` rows, numbered from 1
pub(crate) fn print_preview(dataset: &Dataset, limit: usize) {
    println!("[Preview]");
    print!("{:>4}", "#");
    for column in &dataset.columns {
        print!("  {:<width$}", clip(column, PREVIEW_CELL_WIDTH), width = PREVIEW_CELL_WIDTH);
    }
    println!();

    for (i, record) in dataset.records.iter().take(limit).enumerate() {
        print!("{:>4}", i + 1);
        for column in &dataset.columns {
            let cell = record
                .get(column)
                .as_text()
                .map(|c| clip(&c, PREVIEW_CELL_WIDTH))
                .unwrap_or_else(|| "-".to_string());
            print!("  {:<width$}", cell, width = PREVIEW_CELL_WIDTH);
        }
        println!();
    }
    println!();
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One row per title: swatch, rank, title, mean and color
pub(crate) fn print_salary_table(entities: &[Entity], colors: &dyn ColorSource) {
    let title_width = entities
        .iter()
        .map(|e| e.key.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!("[Average Salary by Job Title]");
    println!(
        "       {:<width$}  {:>12}  COLOR",
        "TITLE",
        "AVG",
        width = title_width
    );
    print_separator(title_width + 30);

    for (rank, entity) in entities.iter().enumerate() {
        let color = colors.color_for(&entity.key);
        println!(
            "{} {:>3}  {:<width$}  {:>12}  {}",
            swatch(color),
            rank + 1,
            entity.key,
            format_thousands(entity.value),
            color.to_hex(),
            width = title_width
        );
    }
}

/// Skills as a wrapped run of colored words, most frequent first
pub(crate) fn print_skill_cloud(entities: &[Entity], colors: &dyn ColorSource) {
    println!("[Skill Cloud]");

    // The top tenth stands out in bold
    let emphasized = entities.len().div_ceil(10);
    let mut line_len = 0;
    for (rank, entity) in entities.iter().enumerate() {
        let word_len = entity.key.chars().count();
        if line_len > 0 && line_len + 1 + word_len > CLOUD_WIDTH {
            println!();
            line_len = 0;
        }
        if line_len > 0 {
            print!(" ");
            line_len += 1;
        }

        let word = paint(&entity.key, colors.color_for(&entity.key));
        if rank < emphasized {
            print!("{}", word.bold());
        } else {
            print!("{}", word);
        }
        line_len += word_len;
    }
    println!();
}

/// Skill counts with their colors
pub(crate) fn print_skill_table(entities: &[Entity], colors: &dyn ColorSource) {
    let width = entities
        .iter()
        .map(|e| e.key.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!("[Skill Frequencies]");
    println!("       {:<width$}  {:>6}  COLOR", "SKILL", "COUNT", width = width);
    print_separator(width + 24);
    for (rank, entity) in entities.iter().enumerate() {
        let color = colors.color_for(&entity.key);
        println!(
            "{} {:>3}  {:<width$}  {:>6}  {}",
            swatch(color),
            rank + 1,
            entity.key,
            colors.value_for(&entity.key).unwrap_or(entity.value) as u64,
            color.to_css(),
            width = width
        );
    }
}

pub(crate) fn print_ramp_info(mapping: &ColorMapping) {
    let ctx = mapping.context();
    println!(
        "{} {} (range {} .. {})",
        style_label("Ramp:"),
        mapping.ramp_name(),
        format_thousands(ctx.min),
        format_thousands(ctx.max)
    );
    if ctx.is_degenerate() {
        print_warning("all values are identical; every entity uses the start of the ramp");
    }
}

pub(crate) fn print_legend() {
    println!("Colors run from the start of the ramp (lowest value) to its end (highest value).");
    println!("The ramp is truncated so its brightest end is never used.");
}
