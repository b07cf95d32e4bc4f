mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session, parse_browser_kind};
use common::scenario::{ALL_SCENARIOS, ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::LogicTester;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Pure front-end logic checks (fast, no browser)
    Logic,
    /// Browser automation against a served shell
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "smartscreen-tester", version)]
#[command(about = "Automated QA for the SmartScreen front end - pure logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Where the shell is served
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);

    let results = run_logic_scenarios(&args, &scenarios);
    let browser_ok = run_browser_scenarios(&args, &scenarios).await;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) || !browser_ok {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    eprintln!("{}", "🖥️  SmartScreen Automated Tester".bright_cyan().bold());
    eprintln!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for name in ALL_SCENARIOS {
            if !scenarios.iter().any(|s| s == name) {
                scenarios.push(name.to_string());
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String]) -> Vec<logic::ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    eprintln!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    eprintln!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        let Some(combined) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if let Some(logic_scenario) = combined.as_logic_scenario() {
            results.push(tester.run_scenario(&logic_scenario));
        } else {
            eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            );
        }
    }

    results
}

/// Returns `false` when any browser scenario failed.
async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> bool {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return true;
    }

    eprintln!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    eprintln!("{}", "-".repeat(30).blue());

    let scenarios = browser_runnable(scenarios);
    if scenarios.is_empty() {
        return true;
    }

    let cfg = build_browser_config(args);
    let mut all_ok = true;

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = parse_browser_kind(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                all_ok = false;
                continue;
            }
        };

        all_ok &= run_browser_scenarios_for_driver(args, &scenarios, kind, &driver).await;
        let _ = driver.quit().await;
    }

    all_ok
}

/// Known scenarios that drive a browser; the rest are reported and dropped.
fn browser_runnable(scenarios: &[String]) -> Vec<String> {
    scenarios
        .iter()
        .filter(|name| match get_scenario(name) {
            Some(scenario) if scenario.has_browser() => true,
            Some(_) => {
                eprintln!(
                    "⚠️  Scenario {} has no browser test implementation",
                    name.yellow()
                );
                false
            }
            None => {
                eprintln!("⚠️  Unknown scenario: {}", name.yellow());
                false
            }
        })
        .cloned()
        .collect()
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> bool {
    let ctx = ScenarioCtx {
        base_url: args.base_url.clone(),
        verbose: args.verbose,
    };
    let label = kind.label();
    let mut all_ok = true;

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };

        let scenario_start = Instant::now();
        match scenario.run_browser(driver, &ctx).await {
            Ok(()) => {
                eprintln!(
                    "✅ [{}] {} - {:?}",
                    label.green(),
                    scenario_name,
                    scenario_start.elapsed()
                );
            }
            Err(e) => {
                all_ok = false;
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    scenario_start.elapsed(),
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name);
                if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                }
            }
        }
    }

    all_ok
}

fn write_reports(
    args: &Args,
    results: &[logic::ScenarioResult],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# SmartScreen Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(&mut output_target, results, duration)?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
