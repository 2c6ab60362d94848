//! Writes a deterministic synthetic `data/student-scores.csv` so the app is
//! runnable without the upstream dataset.

use csv::Writer;

const MALE_NAMES: &[&str] = &[
    "Ben", "Anton", "Leo", "Marco", "Noah", "Omar", "Felix", "Igor", "Ravi", "Tom",
];
const FEMALE_NAMES: &[&str] = &[
    "Anna", "Mia", "Sofia", "Lena", "Priya", "Elif", "Clara", "Yuki", "Nora", "Ines",
];
const LAST_NAMES: &[&str] = &[
    "Keller", "Okafor", "Sato", "Novak", "Haddad", "Lindgren", "Costa", "Petrov",
    "Nguyen", "Moreau", "Schmidt", "Iqbal",
];
const CAREERS: &[&str] = &[
    "Doctor", "Software Engineer", "Teacher", "Banker", "Lawyer", "Artist",
    "Accountant", "Scientist", "Game Developer", "Unknown",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// A subject score: base aptitude, per-subject noise, small habit effects.
fn score(rng: &mut SimpleRng, aptitude: f64, study_hours: i64, absence_days: i64) -> i64 {
    let raw = aptitude + rng.gauss(0.0, 8.0) + 0.5 * study_hours as f64
        - 1.2 * absence_days as f64;
    raw.clamp(0.0, 100.0).round() as i64
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let output_path = "data/student-scores.csv";

    let mut writer = Writer::from_path(output_path)
        .expect("Failed to create data/student-scores.csv");
    writer
        .write_record([
            "id",
            "first_name",
            "last_name",
            "email",
            "gender",
            "part_time_job",
            "absence_days",
            "extracurricular_activities",
            "weekly_self_study_hours",
            "career_aspiration",
            "math_score",
            "history_score",
            "physics_score",
            "chemistry_score",
            "biology_score",
            "english_score",
            "geography_score",
        ])
        .expect("Failed to write header");

    let n_students = 200;
    for id in 1..=n_students {
        let female = rng.next_f64() < 0.5;
        let first_name = if female {
            rng.pick(FEMALE_NAMES)
        } else {
            rng.pick(MALE_NAMES)
        };
        let last_name = rng.pick(LAST_NAMES);
        let gender = if female { "female" } else { "male" };

        let part_time_job = rng.next_f64() < 0.3;
        let extracurricular = rng.next_f64() < 0.45;
        let absence_days = rng.gauss(4.0, 3.0).round().clamp(0.0, 10.0) as i64;
        let base_hours = if part_time_job { 12.0 } else { 20.0 };
        let study_hours = rng.gauss(base_hours, 6.0).round().clamp(0.0, 45.0) as i64;
        let aptitude = rng.gauss(62.0, 12.0);
        let career = rng.pick(CAREERS);
        let email = format!(
            "{}.{}.{id}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        writer
            .write_record([
                id.to_string(),
                first_name.to_string(),
                last_name.to_string(),
                email,
                gender.to_string(),
                if part_time_job { "True" } else { "False" }.to_string(),
                absence_days.to_string(),
                if extracurricular { "True" } else { "False" }.to_string(),
                study_hours.to_string(),
                career.to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
                score(&mut rng, aptitude, study_hours, absence_days).to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_students} students to {output_path}");
}
