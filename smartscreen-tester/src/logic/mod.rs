pub mod reports;
pub mod tester;

pub use tester::{LogicCase, LogicScenario, LogicTester, ScenarioResult};
