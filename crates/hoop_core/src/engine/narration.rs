//! Commentary seam
//!
//! An external narrator (LLM-backed or otherwise) turns an event into a
//! stylized line. The contract is string in, string out; the engine's own
//! `description` is always an acceptable answer.

use crate::models::{EventLog, GameEvent};

pub trait Narrator {
    fn narrate(&self, event: &GameEvent) -> String;
}

/// Returns the engine's description unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNarrator;

impl Narrator for PlainNarrator {
    fn narrate(&self, event: &GameEvent) -> String {
        event.description.clone()
    }
}

impl<F> Narrator for F
where
    F: Fn(&GameEvent) -> String,
{
    fn narrate(&self, event: &GameEvent) -> String {
        self(event)
    }
}

/// Narrate a whole log in order.
pub fn narrate_log<N: Narrator + ?Sized>(narrator: &N, log: &EventLog) -> Vec<String> {
    log.iter().map(|event| narrator.narrate(event)).collect()
}
