//! Screening session — conversation state, validation, and the controller
//! that drives a candidate through intake and technical questions.
//!
//! A session is a linear flow: greet, collect the fixed field list one
//! answer at a time, generate technical questions from the collected
//! profile, then ask those questions one at a time. An exit keyword ends
//! the conversation from any phase.

pub mod controller;
pub mod model;
pub mod state;
pub mod validator;

pub use controller::ScreeningController;
pub use model::{CandidateRecord, Field, Message, Role};
pub use state::{Phase, SessionState};
pub use validator::{ValidationError, validate};
