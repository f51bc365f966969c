use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const NON_COMPETE_REFERENCE: &str = "Section 4: Non-Compete Clause";

pub const SCRIPTED_REPLIES: [&str; 5] = [
    "Based on the employment contract, this clause means that you cannot work for competitors for 2 years after leaving. This is quite restrictive and may limit your future job opportunities.",
    "That section requires you to work exclusively for the company. This means no side jobs or freelance work unless specifically approved by your employer.",
    "The termination clause allows the company to fire you 'with or without cause', which means they don't need a specific reason. This provides limited job security.",
    "The confidentiality agreement extends beyond your employment period. You'll need to protect company information even after you leave.",
    "This compensation structure includes a base salary plus discretionary bonuses. The key word is 'discretionary' - bonuses are not guaranteed.",
];

/// Produces the assistant's reply to a user message
pub trait ResponseProvider: Send + Sync {
    fn respond(&self, input: &str) -> String;

    /// Document section the reply points at, if any
    fn reference_for(&self, _input: &str) -> Option<String> {
        None
    }
}

/// Picks one of [`SCRIPTED_REPLIES`] at random, ignoring the input
pub struct ScriptedResponder {
    reference_probability: f64,
    rng: Mutex<StdRng>,
}

impl ScriptedResponder {
    pub fn new(reference_probability: f64) -> Self {
        Self::with_rng(reference_probability, StdRng::from_entropy())
    }

    pub fn with_rng(reference_probability: f64, rng: StdRng) -> Self {
        Self {
            reference_probability: reference_probability.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }
}

impl ResponseProvider for ScriptedResponder {
    fn respond(&self, _input: &str) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        SCRIPTED_REPLIES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(SCRIPTED_REPLIES[0])
            .to_string()
    }

    fn reference_for(&self, _input: &str) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_bool(self.reference_probability)
            .then(|| NON_COMPETE_REFERENCE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_come_from_script() {
        let responder = ScriptedResponder::with_rng(0.5, StdRng::seed_from_u64(11));
        for _ in 0..20 {
            let reply = responder.respond("What does clause 4 mean?");
            assert!(SCRIPTED_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_reference_probability_bounds() {
        let always = ScriptedResponder::with_rng(1.0, StdRng::seed_from_u64(1));
        let never = ScriptedResponder::with_rng(0.0, StdRng::seed_from_u64(1));
        assert_eq!(always.reference_for("x").as_deref(), Some(NON_COMPETE_REFERENCE));
        assert_eq!(never.reference_for("x"), None);
    }

    #[test]
    fn test_default_reference_is_none() {
        struct Echo;
        impl ResponseProvider for Echo {
            fn respond(&self, input: &str) -> String {
                input.to_uppercase()
            }
        }
        assert_eq!(Echo.respond("hi"), "HI");
        assert_eq!(Echo.reference_for("hi"), None);
    }
}
