use super::super::action::NotificationAction;
use super::super::command::Command;
use crate::state::PortalState;

pub fn reduce(state: &mut PortalState, action: NotificationAction) -> Vec<Command> {
    let result = match action {
        NotificationAction::Push(new) => {
            state.notifications.push(new);
            Ok(())
        }
        NotificationAction::MarkRead(id) => state.notifications.mark_read(&id),
        NotificationAction::MarkAllRead => {
            state.notifications.mark_all_read();
            Ok(())
        }
        NotificationAction::Clear(id) => state.notifications.clear(&id).map(|_| ()),
    };
    if let Err(err) = result {
        log::warn!("{}", err);
        state.last_error = Some(err.to_string());
    }
    Vec::new()
}
