//! Message processing loop

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Upper bound on follow-up messages produced by a single input
const MAX_FOLLOW_UPS: usize = 16;

/// Run a message through `update`, then any follow-up messages it yields
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    let mut steps = 0;

    while let Some(msg) = next {
        if steps == MAX_FOLLOW_UPS {
            tracing::warn!("Dropping follow-up message after {} steps: {:?}", steps, msg);
            break;
        }
        next = handler::update(state, msg).message;
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;

    #[test]
    fn test_key_follow_up_is_processed() {
        let mut state = AppState::new();
        process_message(&mut state, Message::Key(InputKey::CharCtrl('k')));
        assert!(state.overlays.command_palette);
    }

    #[test]
    fn test_quit_key() {
        let mut state = AppState::new();
        process_message(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit());
    }
}
