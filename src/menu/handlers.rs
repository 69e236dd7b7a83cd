use crate::component::{Concatenator, Grouper, Renamer, Segmenter, Trimmer};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_concatenator(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let concatenator = Concatenator::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = concatenator.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_trimmer(term: &Term, shutdown_signal: &Arc<AtomicBool>, config: &Config) -> Result<()> {
    let trimmer = Trimmer::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = trimmer.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_segmenter(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    let segmenter = Segmenter::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = segmenter.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_grouper(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let grouper = Grouper::new(Arc::clone(shutdown_signal));

    if let Err(e) = grouper.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_renamer(term: &Term, shutdown_signal: &Arc<AtomicBool>, config: &Config) -> Result<()> {
    let renamer = Renamer::new(config.clone(), Arc::clone(shutdown_signal));

    if let Err(e) = renamer.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
