//! Binds a session to the host's update sink and dismissal signal.

use crate::variable::{Variable, VariableUpdater};

use super::error::EditError;
use super::session::VariableEditSession;

/// An edit session wired to its outbound collaborators.
///
/// `updater` receives the finalized variable exactly once, on a validated
/// submit. `on_dismiss` fires on cancel and right after that hand-off.
pub struct VariableEditFlow<U, D>
where
    U: VariableUpdater,
    D: FnMut(),
{
    session: VariableEditSession,
    updater: U,
    on_dismiss: D,
}

impl<U, D> VariableEditFlow<U, D>
where
    U: VariableUpdater,
    D: FnMut(),
{
    pub fn new(session: VariableEditSession, updater: U, on_dismiss: D) -> Self {
        Self {
            session,
            updater,
            on_dismiss,
        }
    }

    pub fn session(&self) -> &VariableEditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut VariableEditSession {
        &mut self.session
    }

    /// Hand the finalized variable to the updater, then dismiss.
    ///
    /// On error neither the updater nor the dismissal signal is invoked.
    pub fn submit(&mut self) -> Result<Variable, EditError> {
        let finalized = self.session.submit()?;
        self.updater.update_variable(&finalized.id, finalized.clone());
        (self.on_dismiss)();
        Ok(finalized)
    }

    /// Discard the working copy and dismiss.
    pub fn cancel(&mut self) {
        self.session.close();
        (self.on_dismiss)();
    }
}
