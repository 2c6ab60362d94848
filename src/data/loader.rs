use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{Gender, StudentDataset, StudentRecord};
use crate::color;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the student dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited table with a named-column header row
/// * `.json` – records-oriented array (`df.to_json(orient='records')`)
pub fn load_file(path: &Path) -> Result<StudentDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Raw rows – the serde view of the file before normalization
// ---------------------------------------------------------------------------

/// One row as it appears in the file: numeric cells optional (missing → 0),
/// boolean-like cells either real booleans (JSON) or free text ("True",
/// "False").  Extra columns such as `id` and `email` are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    first_name: String,
    last_name: String,
    gender: String,
    #[serde(default)]
    part_time_job: Option<FlexBool>,
    #[serde(default)]
    absence_days: Option<i64>,
    #[serde(default)]
    extracurricular_activities: Option<FlexBool>,
    #[serde(default)]
    weekly_self_study_hours: Option<i64>,
    #[serde(default)]
    career_aspiration: Option<String>,
    #[serde(default)]
    math_score: Option<f64>,
    #[serde(default)]
    history_score: Option<f64>,
    #[serde(default)]
    physics_score: Option<f64>,
    #[serde(default)]
    chemistry_score: Option<f64>,
    #[serde(default)]
    biology_score: Option<f64>,
    #[serde(default)]
    english_score: Option<f64>,
    #[serde(default)]
    geography_score: Option<f64>,
}

/// A boolean-like cell across both input formats: real booleans (JSON),
/// text ("True"), or numeric 0/1.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlexBool {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FlexBool {
    fn as_bool(&self) -> bool {
        match self {
            FlexBool::Bool(b) => *b,
            FlexBool::Number(n) => *n != 0.0,
            FlexBool::Text(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1")
            }
        }
    }
}

/// Normalize a raw row: missing numerics become 0, missing booleans false,
/// and the derived display color is computed here, exactly once per record.
fn from_raw(raw: RawRecord) -> Result<StudentRecord> {
    let gender: Gender = raw.gender.parse()?;

    Ok(StudentRecord {
        first_name: raw.first_name,
        last_name: raw.last_name,
        gender,
        part_time_job: raw.part_time_job.map(|b| b.as_bool()).unwrap_or(false),
        extracurricular_activities: raw
            .extracurricular_activities
            .map(|b| b.as_bool())
            .unwrap_or(false),
        career_aspiration: raw.career_aspiration.unwrap_or_default(),
        absence_days: raw.absence_days.unwrap_or(0),
        weekly_self_study_hours: raw.weekly_self_study_hours.unwrap_or(0),
        math_score: raw.math_score.unwrap_or(0.0),
        history_score: raw.history_score.unwrap_or(0.0),
        physics_score: raw.physics_score.unwrap_or(0.0),
        chemistry_score: raw.chemistry_score.unwrap_or(0.0),
        biology_score: raw.biology_score.unwrap_or(0.0),
        english_score: raw.english_score.unwrap_or(0.0),
        geography_score: raw.geography_score.unwrap_or(0.0),
        color: color::gender_color(gender),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<StudentDataset> {
    let file =
        File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv(file)
}

/// Parse CSV from any reader.  Split out so tests can feed in-memory data.
fn read_csv<R: Read>(reader: R) -> Result<StudentDataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_no, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let record = from_raw(raw).with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(StudentDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "first_name": "Anna",
///     "last_name": "Keller",
///     "gender": "female",
///     "part_time_job": false,
///     "absence_days": 3,
///     ...
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<StudentDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<StudentDataset> {
    let raws: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let records = raws
        .into_iter()
        .enumerate()
        .map(|(i, raw)| from_raw(raw).with_context(|| format!("JSON record {i}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(StudentDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_parse_with_extra_columns_ignored() {
        let csv = "\
id,first_name,last_name,email,gender,part_time_job,absence_days,extracurricular_activities,weekly_self_study_hours,career_aspiration,math_score,history_score,physics_score,chemistry_score,biology_score,english_score,geography_score
1,Anna,Keller,anna.keller@example.com,female,False,3,True,20,Doctor,88,72,80,79,91,85,64
2,Ben,Okafor,ben.okafor@example.com,Male,True,0,False,7,Banker,55,61,48,52,47,66,70
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let anna = &ds.records[0];
        assert_eq!(anna.gender, Gender::Female);
        assert!(!anna.part_time_job);
        assert!(anna.extracurricular_activities);
        assert_eq!(anna.absence_days, 3);
        assert_eq!(anna.math_score, 88.0);

        let ben = &ds.records[1];
        assert_eq!(ben.gender, Gender::Male);
        assert!(ben.part_time_job);
        assert_eq!(ben.weekly_self_study_hours, 7);
    }

    #[test]
    fn missing_numerics_normalize_to_zero() {
        let csv = "\
first_name,last_name,gender,part_time_job,absence_days,weekly_self_study_hours,math_score
Mia,Sato,female,,,,
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let mia = &ds.records[0];
        assert!(!mia.part_time_job);
        assert_eq!(mia.absence_days, 0);
        assert_eq!(mia.weekly_self_study_hours, 0);
        assert_eq!(mia.math_score, 0.0);
        assert_eq!(mia.history_score, 0.0);
        assert_eq!(mia.career_aspiration, "");
    }

    #[test]
    fn derived_color_follows_gender() {
        let csv = "\
first_name,last_name,gender
Anna,Keller,female
Ben,Okafor,male
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].color, color::gender_color(Gender::Female));
        assert_eq!(ds.records[1].color, color::gender_color(Gender::Male));
        assert_ne!(ds.records[0].color, ds.records[1].color);
    }

    #[test]
    fn bad_gender_fails_the_load_with_row_context() {
        let csv = "\
first_name,last_name,gender
Anna,Keller,robot
";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV row 0"), "{msg}");
        assert!(msg.contains("robot"), "{msg}");
    }

    #[test]
    fn json_records_parse_with_native_booleans() {
        let json = r#"[
            {
                "first_name": "Anna",
                "last_name": "Keller",
                "gender": "female",
                "part_time_job": false,
                "absence_days": 3,
                "extracurricular_activities": true,
                "weekly_self_study_hours": 20,
                "career_aspiration": "Doctor",
                "math_score": 88.0
            },
            {
                "first_name": "Ben",
                "last_name": "Okafor",
                "gender": "male"
            }
        ]"#;
        let ds = read_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.records[0].extracurricular_activities);
        assert_eq!(ds.records[0].math_score, 88.0);
        assert_eq!(ds.records[1].absence_days, 0);
        assert!(!ds.records[1].part_time_job);
    }

    #[test]
    fn numeric_boolean_like_cells_parse() {
        let csv = "\
first_name,last_name,gender,part_time_job,extracurricular_activities
Ida,Berg,female,1,0
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(ds.records[0].part_time_job);
        assert!(!ds.records[0].extracurricular_activities);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_file(Path::new("students.parquet")).unwrap_err();
        assert!(err.to_string().contains(".parquet"));
    }
}
