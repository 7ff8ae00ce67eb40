use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::json;

const TITLES: [(&str, f64); 10] = [
    ("AI Research Scientist", 165_000.0),
    ("Machine Learning Engineer", 150_000.0),
    ("Head of AI", 190_000.0),
    ("Data Scientist", 125_000.0),
    ("Data Engineer", 118_000.0),
    ("NLP Engineer", 140_000.0),
    ("Computer Vision Engineer", 138_000.0),
    ("AI Product Manager", 132_000.0),
    ("Data Analyst", 85_000.0),
    ("Robotics Engineer", 128_000.0),
];

const INDUSTRIES: [&str; 5] = ["Technology", "Finance", "Healthcare", "Retail", "Automotive"];

// Earlier entries are drawn more often
const SKILLS: [&str; 14] = [
    "Python", "SQL", "TensorFlow", "PyTorch", "AWS", "Kubernetes", "Docker", "Scala",
    "Spark", "Statistics", "Linux", "Git", "Tableau", "Rust",
];

/// Simple pseudo-random number generator (xorshift)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / u64::MAX as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

struct Posting {
    title: &'static str,
    salary: f64,
    industry: &'static str,
    skills: Vec<&'static str>,
}

fn postings(count: usize, seed: u64) -> Vec<Posting> {
    let mut rng = SimpleRng::new(seed);
    (0..count)
        .map(|_| {
            let (title, base) = TITLES[rng.below(TITLES.len())];
            let salary = (base * (0.8 + 0.4 * rng.next_f64())).round();
            let industry = INDUSTRIES[rng.below(INDUSTRIES.len())];

            let mut skills = Vec::new();
            for _ in 0..3 + rng.below(3) {
                // Squaring skews picks towards the front of the list
                let r = rng.next_f64();
                let skill = SKILLS[((r * r) * SKILLS.len() as f64) as usize % SKILLS.len()];
                if !skills.contains(&skill) {
                    skills.push(skill);
                }
            }

            Posting {
                title,
                salary,
                industry,
                skills,
            }
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Posting]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "job_title,salary_usd,industry,required_skills")?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},\"{}\"",
            row.title,
            row.salary,
            row.industry,
            row.skills.join(", ")
        )?;
    }
    writer.flush()
}

fn write_jsonl(path: &Path, rows: &[Posting]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in rows {
        let record = json!({
            "job_title": row.title,
            "salary_usd": row.salary,
            "industry": row.industry,
            "required_skills": row.skills,
        });
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    let rows = postings(500, 2025);

    // Full synthetic dataset
    write_csv(&dir.join("jobs.csv"), &rows)?;

    // Same rows as JSON lines, skills as arrays
    write_jsonl(&dir.join("jobs.jsonl"), &rows)?;

    // Every title paid the same: exercises the degenerate color fallback
    let flat: Vec<Posting> = postings(50, 7)
        .into_iter()
        .map(|p| Posting {
            salary: 100_000.0,
            ..p
        })
        .collect();
    write_csv(&dir.join("flat_salary.csv"), &flat)?;

    println!("Generated: jobs.csv, jobs.jsonl, flat_salary.csv");
    Ok(())
}
