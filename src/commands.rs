//! Ordered application of player commands
//!
//! Each command runs to completion before the next one starts. The batch is
//! applied in `PreUpdate`, ahead of `StateTransition`, so the frame that
//! handles a move already shows its party position, discovery and screen.

use bevy::prelude::*;

use crate::map::{CapitalName, PartyPosition, RenameError, TileRoster};
use crate::messages::{CapitalRenameRejected, CapitalRenamed, MoveResolved, PlayerCommand};
use crate::movement::{MoveOutcome, attempt_move};
use crate::ui::mode::Screen;

/// What a single command reported besides its effect on the world
#[derive(Debug, Clone, PartialEq)]
pub enum CommandReport {
    Move(MoveResolved),
    Renamed(String),
    RenameRejected(RenameError),
    Navigated,
}

/// Apply one command to the world and the working screen.
pub fn apply_command(
    command: &PlayerCommand,
    roster: &mut TileRoster,
    party: &mut PartyPosition,
    capital_name: &mut CapitalName,
    screen: &mut Screen,
) -> CommandReport {
    match command {
        PlayerCommand::Move(request) => {
            let from = party.tile().clone();
            let outcome = attempt_move(roster, party, &request.to);

            match &outcome {
                MoveOutcome::Moved { .. } => info!(
                    "Party moved from '{}' to '{}' ({} of {} tiles discovered)",
                    from,
                    request.to,
                    roster.discovered_count(),
                    roster.len()
                ),
                MoveOutcome::Invalid { reason } => {
                    debug!("Move '{}' -> '{}' refused: {}", from, request.to, reason)
                }
                MoveOutcome::NoOp => debug!("Move onto current tile '{}' ignored", from),
            }

            *screen = screen.after_move(&outcome);
            CommandReport::Move(MoveResolved {
                from,
                to: request.to.clone(),
                outcome,
            })
        }
        PlayerCommand::EnterCapital => {
            let on_capital = party.tile() == &roster.capital().id;
            if !on_capital {
                debug!("Enter capital ignored: party is on '{}'", party.tile());
            }
            *screen = screen.enter_capital(on_capital);
            CommandReport::Navigated
        }
        PlayerCommand::BackToGlobal => {
            *screen = screen.back_to_global();
            CommandReport::Navigated
        }
        PlayerCommand::RenameCapital(request) => match capital_name.rename(&request.name) {
            Ok(name) => {
                info!("Capital renamed to '{}'", name);
                CommandReport::Renamed(name.to_string())
            }
            Err(reason) => {
                warn!("Rejected capital name '{}': {}", request.name, reason);
                CommandReport::RenameRejected(reason)
            }
        },
    }
}

/// Drain this frame's commands in arrival order and queue the final screen.
#[allow(clippy::too_many_arguments)]
pub fn apply_player_commands(
    mut inbox: MessageReader<PlayerCommand>,
    mut roster: ResMut<TileRoster>,
    mut party: ResMut<PartyPosition>,
    mut capital_name: ResMut<CapitalName>,
    current: Res<State<Screen>>,
    mut next_state: ResMut<NextState<Screen>>,
    mut resolved: MessageWriter<MoveResolved>,
    mut renamed: MessageWriter<CapitalRenamed>,
    mut rejected: MessageWriter<CapitalRenameRejected>,
) {
    let mut screen = current.get().clone();

    for command in inbox.read() {
        let report = apply_command(
            command,
            &mut roster,
            &mut party,
            &mut capital_name,
            &mut screen,
        );
        match report {
            CommandReport::Move(entry) => {
                resolved.write(entry);
            }
            CommandReport::Renamed(name) => {
                renamed.write(CapitalRenamed { name });
            }
            CommandReport::RenameRejected(reason) => {
                rejected.write(CapitalRenameRejected { reason });
            }
            CommandReport::Navigated => {}
        }
    }

    if &screen != current.get() {
        info!("Screen: {} -> {}", current.get().tag(), screen.tag());
        next_state.set(screen);
    }
}

/// Systems that consume `PlayerCommand`; anything reading their reports
/// orders itself after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSet;

pub struct CommandPlugin;

impl Plugin for CommandPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerCommand>()
            .add_systems(PreUpdate, apply_player_commands.in_set(CommandSet));
    }
}
