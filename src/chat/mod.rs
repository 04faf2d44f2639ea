mod controller;

pub use controller::{CONFIG_NOTICE, ChatController, FAILURE_NOTICE, SubmitOutcome};
