use std::collections::HashSet;
use uuid::Uuid;

/// The single process-wide "open row menu" value.
///
/// Deliberately one value rather than per-row flags: opening any menu
/// unconditionally replaces the whole state, so two menus can never be
/// open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open(Uuid),
}

/// The primary modal workflow for a screen. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    Create,
    Edit(Uuid),
    AddMember(Uuid),
}

/// Transient UI state for one screen: open menu, open modal, and the
/// route to restore when a route-triggered create modal closes.
#[derive(Debug, Default)]
pub struct InteractionState {
    menu: MenuState,
    modal: ModalState,
    return_route: Option<String>,
}

impl InteractionState {
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Open the row menu for `id`, closing any other open menu.
    pub fn open_menu(&mut self, id: Uuid) {
        self.menu = MenuState::Open(id);
    }

    /// Row button behavior: a second click on the open menu closes it.
    pub fn toggle_menu(&mut self, id: Uuid) {
        self.menu = if self.menu == MenuState::Open(id) {
            MenuState::Closed
        } else {
            MenuState::Open(id)
        };
    }

    /// A pointer event outside the open menu's region.
    pub fn click_outside(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Open a modal workflow, replacing any current one and closing the
    /// row menu it was launched from.
    pub fn open_modal(&mut self, modal: ModalState) {
        self.menu = MenuState::Closed;
        self.modal = modal;
    }

    /// Route-triggered create: remember where to send the user back so
    /// the URL does not keep its stale create intent.
    pub fn open_create_from_route(&mut self, return_route: impl Into<String>) {
        self.return_route = Some(return_route.into());
        self.open_modal(ModalState::Create);
    }

    /// Close the modal; returns the route to restore, if the modal was
    /// opened from a route parameter.
    pub fn close_modal(&mut self) -> Option<String> {
        self.modal = ModalState::None;
        self.return_route.take()
    }
}

/// One in-flight operation whose re-submission must be blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAction {
    Load,
    Create,
    Update(Uuid),
    Remove(Uuid),
    AddMember(Uuid),
    Resend,
}

/// Tracks outstanding remote calls so the UI can disable their buttons.
///
/// Not a lock: execution is single-threaded and the guard only prevents
/// the same action being dispatched twice while its first call is out.
#[derive(Debug, Default)]
pub struct PendingActions {
    in_flight: HashSet<PendingAction>,
}

impl PendingActions {
    /// Returns false when `action` is already in flight.
    pub fn begin(&mut self, action: PendingAction) -> bool {
        self.in_flight.insert(action)
    }

    pub fn finish(&mut self, action: PendingAction) {
        self.in_flight.remove(&action);
    }

    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.in_flight.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_menu_b_closes_menu_a() {
        let mut state = InteractionState::default();
        let rows = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        // Mutual exclusion holds across distinct rows.
        for &row in &rows {
            state.open_menu(row);
            assert_eq!(state.menu(), MenuState::Open(row));
        }
        assert_eq!(state.menu(), MenuState::Open(rows[2]));
    }

    #[test]
    fn test_toggle_closes_open_menu() {
        let mut state = InteractionState::default();
        let row = Uuid::new_v4();

        state.toggle_menu(row);
        assert_eq!(state.menu(), MenuState::Open(row));
        state.toggle_menu(row);
        assert_eq!(state.menu(), MenuState::Closed);
    }

    #[test]
    fn test_click_outside_closes_menu() {
        let mut state = InteractionState::default();
        state.open_menu(Uuid::new_v4());
        state.click_outside();
        assert_eq!(state.menu(), MenuState::Closed);
    }

    #[test]
    fn test_modal_replaces_and_closes_menu() {
        let mut state = InteractionState::default();
        let row = Uuid::new_v4();

        state.open_menu(row);
        state.open_modal(ModalState::Edit(row));
        assert_eq!(state.menu(), MenuState::Closed);
        assert_eq!(state.modal(), &ModalState::Edit(row));

        // A second primary modal replaces the first.
        state.open_modal(ModalState::Create);
        assert_eq!(state.modal(), &ModalState::Create);
    }

    #[test]
    fn test_route_triggered_create_restores_route_on_close() {
        let mut state = InteractionState::default();

        state.open_create_from_route("/organizations");
        assert_eq!(state.modal(), &ModalState::Create);

        let restore = state.close_modal();
        assert_eq!(restore.as_deref(), Some("/organizations"));
        assert_eq!(state.modal(), &ModalState::None);

        // A plain close has no route to restore.
        state.open_modal(ModalState::Create);
        assert_eq!(state.close_modal(), None);
    }

    #[test]
    fn test_pending_guard_refuses_duplicate_begin() {
        let mut pending = PendingActions::default();
        let id = Uuid::new_v4();

        assert!(pending.begin(PendingAction::Remove(id)));
        assert!(!pending.begin(PendingAction::Remove(id)));
        assert!(pending.is_pending(PendingAction::Remove(id)));

        // Independent actions are not blocked.
        assert!(pending.begin(PendingAction::Create));

        pending.finish(PendingAction::Remove(id));
        assert!(pending.begin(PendingAction::Remove(id)));
    }
}
