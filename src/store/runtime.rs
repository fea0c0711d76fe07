use super::Portal;
use super::command::Command;

pub fn run(portal: &mut Portal, command: Command) {
    let result: anyhow::Result<()> = match command {
        Command::PersistCandidate(candidate) => match &portal.db {
            Some(db) => db.candidate_repo().save(&candidate),
            None => Ok(()),
        },
        Command::SignIn(user) => portal.session.login(user).map_err(Into::into),
        Command::SignOut => portal.session.logout().map_err(Into::into),
    };

    if let Err(err) = result {
        log::error!("Command failed: {:#}", err);
        portal.state.last_error = Some(err.to_string());
    }
}
