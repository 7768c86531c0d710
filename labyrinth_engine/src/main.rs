#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Labyrinth **
//! Treasure-hunt adventure game

use labyrinth_engine::repl::{help_handler, look_handler};
use labyrinth_engine::style::{GameStyle, normal_block};
use labyrinth_engine::{LABYRINTH_VERSION, View, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::{fill, termwidth};

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading labyrinth world...");
    let mut world = load_world().context("while loading LabyrinthWorld")?;
    info!("LabyrinthWorld loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!(
        "{:^width$}",
        world.title.to_uppercase().bright_yellow().underline(),
        width = termwidth()
    );
    println!("{:^width$}\n", format!("v{LABYRINTH_VERSION}").dimmed(), width = termwidth());
    if !world.intro.is_empty() {
        println!("{}\n", fill(&world.intro, normal_block()).description_style());
    }

    let mut view = View::new();
    help_handler(&world, &mut view);
    look_handler(&world, &mut view)?;
    view.flush();

    run_repl(&mut world)?;
    info!("game ended: {:?}", world.state.outcome);
    Ok(())
}
