//! Simulated game-server status shown in the hero section.
//!
//! No real server is queried. The root component starts from
//! `ServerStatus::default()` and replaces it with `ServerStatus::roll` every
//! [`STATUS_REFRESH_INTERVAL_MS`] until its [`RefreshHandle`] is cancelled.

use std::{cell::Cell, rc::Rc};

pub const MAX_PLAYERS: u32 = 64;
pub const STATUS_REFRESH_INTERVAL_MS: u32 = 30_000;

/// Chance that a roll reports the server as offline.
const OFFLINE_CHANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerStatus {
    pub online: bool,
    pub players: u32,
    pub max_players: u32,
}

impl Default for ServerStatus {
    fn default() -> Self {
        Self {
            online: true,
            players: 32,
            max_players: MAX_PLAYERS,
        }
    }
}

impl ServerStatus {
    /// Draws a new status from `sample`, which must yield values in `[0, 1)`.
    ///
    /// The first sample decides the online flag, the second the player count.
    pub fn roll(mut sample: impl FnMut() -> f64) -> Self {
        let online = sample() > OFFLINE_CHANCE;
        let players = ((sample() * MAX_PLAYERS as f64).floor() as u32).min(MAX_PLAYERS - 1);

        Self {
            online,
            players,
            max_players: MAX_PLAYERS,
        }
    }

    pub fn label(&self) -> String {
        let state = if self.online {
            "Server Online"
        } else {
            "Server Offline"
        };
        format!("{} • {}/{} Players", state, self.players, self.max_players)
    }
}

/// Cancellation handle for the periodic status refresh.
///
/// Clones share one flag. The owning component keeps a clone and cancels it on
/// teardown; the refresh loop holds another and stops once `refresh` reports the
/// handle as cancelled.
#[derive(Clone, Debug)]
pub struct RefreshHandle {
    active: Rc<Cell<bool>>,
}

impl RefreshHandle {
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn cancel(&self) {
        self.active.set(false);
    }

    /// Replaces `status` with a fresh roll while the handle is active.
    ///
    /// Returns `false`, leaving `status` untouched, once cancelled.
    pub fn refresh(&self, status: &mut ServerStatus, sample: impl FnMut() -> f64) -> bool {
        if !self.is_active() {
            return false;
        }

        *status = ServerStatus::roll(sample);
        true
    }
}

impl Default for RefreshHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RefreshHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.active, &other.active)
    }
}
