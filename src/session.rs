//! Drives a selection controller the way the page would: clicks from the
//! command line or stdin, and the position outcome whenever it arrives.

use anyhow::{Context, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::error::TryRecvError;
use vetmap_core::prelude::*;

use crate::geolocation::{self, GeolocationProvider, PositionOutcome};
use crate::render;

pub type Controller = SelectionController<DisplayState>;

/// Finds a clinic by index or case-insensitive name
pub fn resolve_destination(
    destinations: &[Destination],
    target: &str,
) -> anyhow::Result<DestinationId> {
    let target = target.trim();
    if let Ok(id) = target.parse::<DestinationId>() {
        if id < destinations.len() {
            return Ok(id);
        }
        bail!(
            "No clinic with index {id}, there are {} clinics",
            destinations.len()
        );
    }

    destinations
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(target))
        .map(|d| d.id)
        .with_context(|| format!("No clinic named '{target}'"))
}

/// Applies an outcome the environment already knows at page load (no
/// geolocation at all). Returns whether the request has settled.
fn settle_immediate(controller: &mut Controller, pending: &mut Receiver<PositionOutcome>) -> bool {
    match pending.try_recv() {
        Ok(outcome) => {
            controller.on_position(outcome);
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Closed) => {
            controller.on_position(geolocation::abandoned());
            true
        }
    }
}

/// Applies clicks immediately, then waits for the position outcome
pub async fn run_estimate(
    mut controller: Controller,
    provider: GeolocationProvider,
    options: PositionOptions,
    selections: &[String],
) -> anyhow::Result<Controller> {
    let mut pending = geolocation::request_position(provider, options);
    let settled = settle_immediate(&mut controller, &mut pending);

    for target in selections {
        let id = resolve_destination(controller.destinations(), target)?;
        let destination = controller.select_destination(id)?;
        tracing::info!(clinic = %destination.name, "Selected clinic");
    }

    if !settled {
        controller.on_position(geolocation::received(pending.await));
    }
    Ok(controller)
}

/// Line-driven loop multiplexed with the pending position request
pub async fn run_interactive(
    mut controller: Controller,
    provider: GeolocationProvider,
    options: PositionOptions,
) -> anyhow::Result<()> {
    let mut pending = geolocation::request_position(provider, options);
    let mut settled = settle_immediate(&mut controller, &mut pending);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_state(&controller);
    println!("commands: list | select <index|name> | show | quit");

    loop {
        tokio::select! {
            outcome = &mut pending, if !settled => {
                settled = true;
                controller.on_position(geolocation::received(outcome));
                print_state(&controller);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match handle_line(&mut controller, &line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => println!("error: {e:#}"),
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_line(controller: &mut Controller, line: &str) -> anyhow::Result<Flow> {
    let (command, argument) = line
        .trim()
        .split_once(char::is_whitespace)
        .map_or((line.trim(), ""), |(c, a)| (c, a.trim()));

    match command {
        "" => {}
        "list" => {
            let rows = controller.estimate_all();
            println!("{}", render::render_table(&rows, controller.active()));
        }
        "select" => {
            if argument.is_empty() {
                bail!("usage: select <index|name>");
            }
            let id = resolve_destination(controller.destinations(), argument)?;
            controller.select_destination(id)?;
            print_state(controller);
        }
        "show" => print_state(controller),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => bail!("Unknown command '{other}'"),
    }

    Ok(Flow::Continue)
}

fn print_state(controller: &Controller) {
    print!(
        "{}",
        render::render_state(controller.active_destination(), controller.publisher())
    );
}
