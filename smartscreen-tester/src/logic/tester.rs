use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// One named check inside a logic scenario.
#[derive(Clone, Copy)]
pub struct LogicCase {
    pub name: &'static str,
    pub run: fn() -> Result<()>,
}

impl LogicCase {
    pub const fn new(name: &'static str, run: fn() -> Result<()>) -> Self {
        Self { name, run }
    }
}

#[derive(Clone)]
pub struct LogicScenario {
    pub name: &'static str,
    pub cases: Vec<LogicCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub cases_run: usize,
    pub cases_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(&self, scenario: &LogicScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }
        let start = Instant::now();
        let mut failures = Vec::new();

        for case in &scenario.cases {
            match (case.run)() {
                Ok(()) => {
                    if self.verbose {
                        println!("  ✓ {}", case.name);
                    }
                }
                Err(err) => {
                    if self.verbose {
                        println!("  ✗ {}: {err:#}", case.name.red());
                    }
                    failures.push(format!("{}: {err:#}", case.name));
                }
            }
        }

        let cases_run = scenario.cases.len();
        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            cases_run,
            cases_passed: cases_run - failures.len(),
            failures,
            duration: start.elapsed(),
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
