//! Line-oriented commands read from stdin.
//!
//! `status`, `state`, `id`, `snapshot` and `quit`/`exit` are reserved words;
//! any other non-empty line is handed to the controller as a requested state.

use smartbuilding_app::services::building_controller::BuildingController;

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Status,
    State,
    Id,
    Snapshot,
    Quit,
    Empty,
    Transition(&'a str),
}

impl<'a> Command<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            "status" => Self::Status,
            "state" => Self::State,
            "id" => Self::Id,
            "snapshot" => Self::Snapshot,
            "quit" | "exit" => Self::Quit,
            _ => Self::Transition(line),
        }
    }
}

/// Run `command` against `controller`, returning the line to print, if any.
///
/// # Errors
///
/// Returns an error if the record snapshot cannot be serialised.
pub fn execute(
    controller: &mut BuildingController,
    command: &Command<'_>,
) -> Result<Option<String>, serde_json::Error> {
    let reply = match command {
        Command::Status => Some(controller.status_report()),
        Command::State => Some(controller.current_state().to_string()),
        Command::Id => Some(controller.identity().to_string()),
        Command::Snapshot => Some(serde_json::to_string(controller.record())?),
        Command::Transition(requested) => {
            let accepted = controller.set_current_state(requested);
            Some(format!(
                "{} -> {}",
                if accepted { "ok" } else { "rejected" },
                controller.current_state()
            ))
        }
        Command::Quit | Command::Empty => None,
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> BuildingController {
        BuildingController::with_start_state(Some("HQ"), Some("closed")).unwrap()
    }

    #[test]
    fn should_parse_reserved_words_case_insensitively() {
        assert_eq!(Command::parse("STATUS"), Command::Status);
        assert_eq!(Command::parse(" state "), Command::State);
        assert_eq!(Command::parse("Id"), Command::Id);
        assert_eq!(Command::parse("snapshot"), Command::Snapshot);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn should_treat_other_lines_as_transitions() {
        assert_eq!(
            Command::parse("  Fire Drill "),
            Command::Transition("Fire Drill")
        );
    }

    #[test]
    fn should_report_accepted_transition() {
        let mut controller = controller();
        let reply = execute(&mut controller, &Command::Transition("fire drill")).unwrap();
        assert_eq!(reply.as_deref(), Some("ok -> fire drill"));
    }

    #[test]
    fn should_report_rejected_transition() {
        let mut controller = controller();
        let reply = execute(&mut controller, &Command::Transition("lunch")).unwrap();
        assert_eq!(reply.as_deref(), Some("rejected -> closed"));
    }

    #[test]
    fn should_print_identity_and_state() {
        let mut controller = controller();
        assert_eq!(
            execute(&mut controller, &Command::Id).unwrap().as_deref(),
            Some("hq")
        );
        assert_eq!(
            execute(&mut controller, &Command::State).unwrap().as_deref(),
            Some("closed")
        );
    }

    #[test]
    fn should_print_record_snapshot_as_json() {
        let mut controller = controller();
        let reply = execute(&mut controller, &Command::Snapshot).unwrap().unwrap();
        assert_eq!(
            reply,
            r#"{"identity":"hq","current_state":"closed","last_normal_state":"closed"}"#
        );
    }

    #[test]
    fn should_stay_silent_on_empty_and_quit() {
        let mut controller = controller();
        assert_eq!(execute(&mut controller, &Command::Empty).unwrap(), None);
        assert_eq!(execute(&mut controller, &Command::Quit).unwrap(), None);
    }
}
