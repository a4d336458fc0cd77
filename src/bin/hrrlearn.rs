//! Demonstration binary: run the experiment described by a settings file
//! (or the defaults), log a summary, and write the per-location value
//! report to `final.log`.

use hrrlearn::{Learner, Result, RunConfig};
use std::env;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = match env::args().nth(1) {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    let episodes = config.number_of_runs;

    let mut learner = Learner::new(config)?;
    info!(goal = learner.goal_location(), episodes, "starting run");

    let stats = learner.run_episodes(episodes)?;
    info!(
        goals_reached = stats.goals_reached,
        step_cap_hits = stats.step_cap_hits,
        min_steps = ?stats.min_steps,
        max_steps = ?stats.max_steps,
        average_steps = ?stats.average_steps(),
        "run complete"
    );

    for (location, value) in learner.report_values()? {
        let marker = if location == learner.goal_location() {
            " <- goal"
        } else {
            ""
        };
        println!("{location:>4}  {value:+.6}{marker}");
    }

    fs::write("final.log", learner.report_json()?)?;
    Ok(())
}
