//! Common test utilities

use std::io::Write;
use std::path::Path;

/// One synthetic posting: title, salary, industry, skills
pub type Posting<'a> = (&'a str, Option<f64>, &'a str, &'a str);

/// A small dataset with known averages and skill counts.
///
/// Means: Head of AI 200000, ML Engineer 150000, Data Scientist 120000,
/// Data Analyst 80000. Python appears 4 times, SQL 3, AWS 2, Rust 1.
pub fn sample_postings() -> Vec<Posting<'static>> {
    vec![
        ("Data Scientist", Some(110000.0), "Finance", "Python, SQL"),
        ("ML Engineer", Some(150000.0), "Technology", "Python, AWS"),
        ("Data Scientist", Some(130000.0), "Technology", "Python, SQL, AWS"),
        ("Data Analyst", Some(80000.0), "Retail", "SQL"),
        ("Head of AI", Some(200000.0), "Technology", "Python, Rust"),
        ("Data Analyst", None, "Retail", ""),
    ]
}

/// Write postings as CSV with the default column names
pub fn write_csv(path: &Path, rows: &[Posting]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "job_title,salary_usd,industry,required_skills")?;
    for (title, salary, industry, skills) in rows {
        let salary = salary.map(|s| s.to_string()).unwrap_or_default();
        writeln!(file, "{},{},{},\"{}\"", title, salary, industry, skills)?;
    }
    Ok(())
}

/// Write postings as a JSON array
pub fn write_json(path: &Path, rows: &[Posting]) -> std::io::Result<()> {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|(title, salary, industry, skills)| {
            serde_json::json!({
                "job_title": title,
                "salary_usd": salary,
                "industry": industry,
                "required_skills": skills,
            })
        })
        .collect();
    let text = serde_json::to_string_pretty(&records).map_err(std::io::Error::other)?;
    std::fs::write(path, text)
}

/// Write postings to an .xlsx workbook, on a sheet with the given name
pub fn write_xlsx(
    path: &Path,
    sheet_name: &str,
    rows: &[Posting],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    for (col, name) in ["job_title", "salary_usd", "industry", "required_skills"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, (title, salary, industry, skills)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *title)?;
        if let Some(salary) = salary {
            sheet.write_number(row, 1, *salary)?;
        }
        sheet.write_string(row, 2, *industry)?;
        if !skills.is_empty() {
            sheet.write_string(row, 3, *skills)?;
        }
    }
    workbook.save(path)
}

/// Write arbitrary text (config files, malformed data)
pub fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
